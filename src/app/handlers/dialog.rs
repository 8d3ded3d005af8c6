//! Handler für Optionen.

use crate::app::AppState;
use crate::shared::AssistantOptions;

/// Übernimmt neue Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: AssistantOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = AssistantOptions::config_path();
    state.options.save_to_file(&path)
}

//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Jeder Intent, der Cursor oder Bau-Zustand ändert, endet mit `RefreshDerived`.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::TilePicked { coords } => vec![
            AppCommand::PickTile {
                coords,
                pick_first_track_element: state.options.pick_first_track_element,
            },
            AppCommand::RefreshDerived,
        ],
        AppIntent::IterateRequested { direction } => vec![
            AppCommand::SetBuildDirection { direction },
            AppCommand::MoveSelection { direction },
            AppCommand::RefreshDerived,
        ],
        AppIntent::BuildDirectionChanged { direction } => vec![
            AppCommand::SetBuildDirection { direction },
            AppCommand::RefreshDerived,
        ],
        AppIntent::TrackTypeChanged { track_type } => vec![
            AppCommand::SetTrackType { track_type },
            AppCommand::RefreshDerived,
        ],
        AppIntent::SelectionCleared => {
            vec![AppCommand::ClearSelection, AppCommand::RefreshDerived]
        }
        AppIntent::RefreshRequested => vec![AppCommand::RefreshDerived],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;

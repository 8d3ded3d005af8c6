//! Use-Case: Selektion innerhalb der Segment-Folge verschieben.

use crate::core::BuildDirection;
use crate::AppState;

/// Verschiebt die Selektion um einen Schritt in `direction`.
pub fn move_selection(state: &mut AppState, direction: BuildDirection) -> bool {
    let moved = state.cursor.move_selection(direction);
    if moved {
        log::debug!(
            "Selektion {:?} auf Index {:?}",
            direction,
            state.cursor.selected_index()
        );
    }
    moved
}

//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::SelectionDerived;
use crate::AppState;

/// Verwirft Segment-Folge, Kachel-Elemente und die Ride-Zuordnung des Bau-Zustands.
pub fn clear_selection(state: &mut AppState) {
    state.cursor.clear();
    state.track_elements_on_selected_tile.clear();
    state.build.clear_selection();
    state.derived = SelectionDerived::default();
}

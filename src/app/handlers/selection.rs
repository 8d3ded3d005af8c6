//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{BuildDirection, CoordsXY, Segment, World};

/// Protokolliert, wenn sich das selektierte Segment geändert hat.
fn log_if_selection_changed(state: &AppState, old_selection: Option<Segment>) {
    let new_selection = state.selected_segment().copied();
    if new_selection != old_selection {
        match new_selection {
            Some(segment) => log::info!("Selektiertes Segment: {}", segment),
            None => log::info!("Selektion aufgehoben"),
        }
    }
}

/// Baut die Segment-Folge aus der angeklickten Kachel neu auf.
pub fn pick_tile<W: World + ?Sized>(
    state: &mut AppState,
    world: &W,
    coords: CoordsXY,
    pick_first_track_element: bool,
) {
    let old = state.selected_segment().copied();
    use_cases::selection::pick_tile(state, world, coords, pick_first_track_element);
    log_if_selection_changed(state, old);
}

/// Verschiebt die Selektion um einen Schritt.
pub fn move_selection(state: &mut AppState, direction: BuildDirection) {
    let old = state.selected_segment().copied();
    if !use_cases::selection::move_selection(state, direction) {
        log::debug!("Kein Segment {:?} der Selektion", direction);
    }
    log_if_selection_changed(state, old);
}

/// Verwirft die Selektion.
pub fn clear(state: &mut AppState) {
    let old = state.selected_segment().copied();
    use_cases::selection::clear_selection(state);
    log_if_selection_changed(state, old);
}

/// Berechnet abgeleitete Werte neu.
pub fn refresh<W: World + ?Sized>(state: &mut AppState, world: &W) {
    use_cases::selection::refresh_derived(state, world);
}

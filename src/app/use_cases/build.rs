//! Use-Cases für den Bau-Zustand.

use crate::core::{BuildDirection, TrackType};
use crate::AppState;

/// Setzt die Baurichtung.
pub fn set_build_direction(state: &mut AppState, direction: BuildDirection) {
    state.build.direction = Some(direction);
    log::debug!("Baurichtung: {:?}", direction);
}

/// Setzt den zu bauenden Track-Typ.
pub fn set_track_type(state: &mut AppState, track_type: TrackType) {
    state.build.track_type = Some(track_type);
    log::debug!("Track-Typ für den nächsten Bau: {}", track_type);
}

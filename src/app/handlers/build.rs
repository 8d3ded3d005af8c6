//! Handler für den Bau-Zustand.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{BuildDirection, TrackType};

/// Setzt die Baurichtung.
pub fn set_direction(state: &mut AppState, direction: BuildDirection) {
    use_cases::build::set_build_direction(state, direction);
}

/// Setzt den Track-Typ des nächsten Baus.
pub fn set_track_type(state: &mut AppState, track_type: TrackType) {
    use_cases::build::set_track_type(state, track_type);
}

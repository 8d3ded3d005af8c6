//! Use-Case-Funktionen für die Segment-Selektion.
//!
//! Aufgeteilt nach Auslöser:
//! - `pick`: Kachel-Klick, baut die Segment-Folge neu auf
//! - `iterate`: Schritt vor/zurück innerhalb der Folge
//! - `refresh`: Neuberechnung der abgeleiteten Werte
//! - `helpers`: Gemeinsame Hilfsfunktionen

mod helpers;
mod iterate;
mod pick;
mod refresh;

pub use helpers::clear_selection;
pub use iterate::move_selection;
pub use pick::pick_tile;
pub use refresh::refresh_derived;

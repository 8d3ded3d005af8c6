//! Segment-Auflösung über der Welt-Schnittstelle.
//!
//! Von unten nach oben: Kachel-Abfragen, Auflösung Ride + Lage → Track-Element,
//! Iteratoren, Nachbar-Prüfung und der Aufbau ganzer Segment-Folgen.

pub mod iterator;
pub mod next_segment;
pub mod resolver;
pub mod sequence;
pub mod tile_elements;

pub use iterator::{iterator_at, iterator_at_location};
pub use next_segment::{probe_next_segment, NextSegmentOutcome};
pub use resolver::{
    element_locations_of_segment, resolve_all_elements_of_segment, resolve_segment,
    NotFoundReason, Resolution, TieBreakRule,
};
pub use sequence::{create_segment_sequence, SegmentSequence};
pub use tile_elements::{
    get_surface_elements, get_tile_elements, get_track_elements, is_ride_a_stall,
};

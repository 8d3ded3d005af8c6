//! Ride Track Assistant Library.
//! Segment-Auflösung und Traversierung über einer Kachel-Welt, als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod finder;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, SegmentCursor, SelectionDerived};
pub use core::{
    BuildDirection, CoordsXY, CoordsXYZ, CoordsXYZD, Direction, MemoryWorld, RideId, RideType,
    Segment, TrackIterator, TrackType, World,
};
pub use finder::{NextSegmentOutcome, Resolution, SegmentSequence};
pub use shared::AssistantOptions;

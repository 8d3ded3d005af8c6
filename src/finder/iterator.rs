//! Erzeugt Track-Iteratoren an Segmenten.
//!
//! Der Iterator der Welt wird aus Kachel + Elementindex gebaut, nicht aus einem
//! Segment; deshalb wird der Index jedes Mal frisch über die Auflösung ermittelt.

use super::resolve_segment;
use crate::core::{CoordsXYZD, RideId, Segment, TrackIterator, World};

/// Frischer Track-Iterator am Segment, `None` wenn Auflösung oder Welt scheitern.
pub fn iterator_at<'w, W: World + ?Sized>(
    world: &'w W,
    segment: &Segment,
) -> Option<Box<dyn TrackIterator + 'w>> {
    iterator_at_location(world, segment.ride, segment.location)
}

/// Frischer Track-Iterator für Ride + Lage.
pub fn iterator_at_location<'w, W: World + ?Sized>(
    world: &'w W,
    ride: RideId,
    location: CoordsXYZD,
) -> Option<Box<dyn TrackIterator + 'w>> {
    let Some(item) = resolve_segment(world, ride, location).into_item() else {
        log::debug!(
            "Kein Track-Element für Ride {} bei {}, kein Iterator möglich",
            ride,
            location
        );
        return None;
    };

    let iterator = world.track_iterator(location.xy(), item.index);
    if iterator.is_none() {
        log::debug!(
            "Welt liefert keinen Iterator für ({}, {}) Index {}",
            location.x,
            location.y,
            item.index
        );
    }
    iterator
}

//! Baut die zusammenhängende Segment-Folge um ein Start-Segment auf.

use super::iterator_at;
use crate::core::{Segment, TrackIterator, World};

/// Eine zusammenhängende Folge von Segmenten eines Rides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSequence {
    /// Segmente in Fahrtrichtung
    pub segments: Vec<Segment>,
    /// Index des Segments, von dem aus die Folge gebaut wurde
    pub initial_index: usize,
    /// Das letzte Segment führt zurück auf das erste
    pub is_complete_circuit: bool,
}

/// Läuft vom Start-Segment in beide Richtungen, bis die Strecke endet oder sich schließt.
///
/// `max_length` begrenzt die Folge bei inkonsistenter Welt (z.B. Schleifen,
/// die nicht über das Start-Segment laufen).
pub fn create_segment_sequence<W: World + ?Sized>(
    world: &W,
    initial: &Segment,
    max_length: usize,
) -> Option<SegmentSequence> {
    let Some(mut forward_iterator) = iterator_at(world, initial) else {
        log::debug!("Kein Iterator am Start-Segment {}", initial);
        return None;
    };

    let mut forward = vec![*initial];
    let mut is_complete_circuit = false;
    let limit = max_length.max(1);

    while forward_iterator.advance() {
        if forward_iterator.position() == initial.location {
            is_complete_circuit = true;
            break;
        }
        if forward.len() >= limit {
            log::warn!(
                "Segment-Folge ab {} nach {} Stücken abgebrochen",
                initial,
                forward.len()
            );
            break;
        }
        let Some(segment) = segment_at(initial, forward_iterator.as_ref()) else {
            break;
        };
        forward.push(segment);
    }

    let mut backward = Vec::new();
    if !is_complete_circuit {
        if let Some(mut backward_iterator) = iterator_at(world, initial) {
            while backward_iterator.retreat() {
                if backward_iterator.position() == initial.location {
                    is_complete_circuit = true;
                    break;
                }
                if forward.len() + backward.len() >= limit {
                    log::warn!(
                        "Segment-Folge vor {} nach {} Stücken abgebrochen",
                        initial,
                        forward.len() + backward.len()
                    );
                    break;
                }
                let Some(segment) = segment_at(initial, backward_iterator.as_ref()) else {
                    break;
                };
                backward.push(segment);
            }
        }
    }

    let initial_index = backward.len();
    backward.reverse();
    backward.extend(forward);

    log::debug!(
        "Segment-Folge mit {} Stücken gebaut (Start bei Index {}, Rundkurs: {})",
        backward.len(),
        initial_index,
        is_complete_circuit
    );

    Some(SegmentSequence {
        segments: backward,
        initial_index,
        is_complete_circuit,
    })
}

/// Segment an der aktuellen Iterator-Position; Ride und Ride-Typ vom Start-Segment.
fn segment_at(initial: &Segment, iterator: &dyn TrackIterator) -> Option<Segment> {
    let Some(descriptor) = iterator.segment() else {
        log::debug!(
            "Keine Segment-Beschreibung bei {}, Folge endet hier",
            iterator.position()
        );
        return None;
    };
    Some(Segment::new(
        initial.ride,
        descriptor.track_type,
        initial.ride_type,
        iterator.position(),
    ))
}

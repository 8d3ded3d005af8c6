//! Prüft, was unmittelbar vor bzw. hinter einem Segment auf der Strecke liegt.

use super::get_track_elements;
use crate::core::{BuildDirection, Segment, TrackElementItem, TrackIterator, World};
use serde::{Deserialize, Serialize};

/// Was hinter einem Segment in einer Richtung existiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextSegmentOutcome {
    /// Nichts (oder unvollständige Eingaben)
    #[default]
    None,
    /// Ein Entwurfs-Stück (Ghost)
    Ghost,
    /// Ein fest gebautes Stück
    Real,
}

impl NextSegmentOutcome {
    fn of(item: &TrackElementItem) -> Self {
        if item.element.is_ghost {
            NextSegmentOutcome::Ghost
        } else {
            NextSegmentOutcome::Real
        }
    }

    /// `true` wenn dort irgendein Stück liegt.
    pub fn exists(self) -> bool {
        self != NextSegmentOutcome::None
    }
}

/// Klassifiziert das Stück, das ein Schritt in `direction` vom Segment aus erreicht.
///
/// Der Iterator wird nur gelesen, nie bewegt.
pub fn probe_next_segment<W: World + ?Sized>(
    world: &W,
    selected_segment: Option<&Segment>,
    iterator: &dyn TrackIterator,
    direction: Option<BuildDirection>,
) -> NextSegmentOutcome {
    let Some(selected_segment) = selected_segment else {
        log::debug!("Kein selektiertes Segment");
        return NextSegmentOutcome::None;
    };
    let Some(direction) = direction else {
        log::debug!("Keine Baurichtung angegeben");
        return NextSegmentOutcome::None;
    };
    let following = match direction {
        BuildDirection::Next => iterator.next_position(),
        BuildDirection::Previous => iterator.previous_position(),
    };
    let Some(target) = following else {
        log::debug!("Iterator hat keine Position in Richtung {:?}", direction);
        return NextSegmentOutcome::None;
    };

    let for_ride: Vec<TrackElementItem> = get_track_elements(world, target.xy())
        .into_iter()
        .filter(|item| item.element.ride == selected_segment.ride)
        .collect();

    log::debug!(
        "{} Track-Element(e) von Ride {} auf der Kachel bei {}",
        for_ride.len(),
        selected_segment.ride,
        target
    );

    match for_ride.as_slice() {
        [] => NextSegmentOutcome::None,
        [single] => NextSegmentOutcome::of(single),
        candidates => {
            let accepted: Vec<&TrackElementItem> = candidates
                .iter()
                .filter(|item| {
                    let begin_z = world
                        .track_piece(item.segment.track_type)
                        .map(|info| info.begin_z)
                        .unwrap_or(0);
                    let base_z = item.element.base_z;
                    item.element.direction == target.direction
                        && (base_z + begin_z == target.z
                            || base_z - begin_z == target.z
                            || base_z == target.z)
                })
                .collect();

            if accepted.is_empty() {
                log::debug!(
                    "Track bei {} vorhanden, aber weder Höhe noch Richtung passen: {:?}",
                    target,
                    candidates
                        .iter()
                        .map(|item| (item.element.base_z, item.element.direction.value()))
                        .collect::<Vec<_>>()
                );
                return NextSegmentOutcome::None;
            }

            let chosen = if accepted.len() > 1 {
                accepted
                    .iter()
                    .find(|item| item.element.base_z == target.z)
                    .unwrap_or(&accepted[0])
            } else {
                &accepted[0]
            };
            NextSegmentOutcome::of(chosen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        CoordsXYZD, Direction, MemoryWorld, RideClassification, RideId, RideRecord, RideType,
        TrackPlacement, TrackSegmentDescriptor, TrackType,
    };
    use crate::finder::iterator_at;

    const RIDE: RideId = RideId(5);

    struct DeadEnd;

    impl TrackIterator for DeadEnd {
        fn position(&self) -> CoordsXYZD {
            CoordsXYZD::default()
        }
        fn segment(&self) -> Option<&TrackSegmentDescriptor> {
            None
        }
        fn next_position(&self) -> Option<CoordsXYZD> {
            None
        }
        fn previous_position(&self) -> Option<CoordsXYZD> {
            None
        }
        fn advance(&mut self) -> bool {
            false
        }
        fn retreat(&mut self) -> bool {
            false
        }
    }

    fn world() -> MemoryWorld {
        let mut world = MemoryWorld::new();
        world.add_ride(RideRecord {
            id: RIDE,
            ride_type: RideType(52),
            classification: RideClassification::Ride,
        });
        world
    }

    fn place(world: &mut MemoryWorld, track_type: TrackType, location: CoordsXYZD, is_ghost: bool) {
        world
            .place_track(TrackPlacement {
                ride: RIDE,
                track_type,
                location,
                is_ghost,
            })
            .expect("Platzierung erwartet");
    }

    fn start_segment() -> Segment {
        Segment::new(
            RIDE,
            TrackType::FLAT,
            RideType(52),
            CoordsXYZD::new(0, 0, 0, Direction::D0),
        )
    }

    fn probe(world: &MemoryWorld, direction: BuildDirection) -> NextSegmentOutcome {
        let segment = start_segment();
        let iterator = iterator_at(world, &segment).expect("Iterator erwartet");
        probe_next_segment(world, Some(&segment), iterator.as_ref(), Some(direction))
    }

    #[test]
    fn test_missing_inputs_yield_none() {
        let world = world();
        let segment = start_segment();

        assert_eq!(
            probe_next_segment(&world, None, &DeadEnd, Some(BuildDirection::Next)),
            NextSegmentOutcome::None
        );
        assert_eq!(
            probe_next_segment(&world, Some(&segment), &DeadEnd, None),
            NextSegmentOutcome::None
        );
        assert_eq!(
            probe_next_segment(&world, Some(&segment), &DeadEnd, Some(BuildDirection::Next)),
            NextSegmentOutcome::None
        );
    }

    #[test]
    fn test_single_follower_reports_ghost_or_real() {
        let mut world = world();
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(0, 0, 0, Direction::D0), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 0, Direction::D0), true);

        assert_eq!(probe(&world, BuildDirection::Next), NextSegmentOutcome::Ghost);

        world.set_ghost(RIDE, CoordsXYZD::new(32, 0, 0, Direction::D0), false);
        assert_eq!(probe(&world, BuildDirection::Next), NextSegmentOutcome::Real);
        assert_eq!(probe(&world, BuildDirection::Previous), NextSegmentOutcome::None);
    }

    #[test]
    fn test_overlapping_followers_match_direction_and_z() {
        let mut world = world();
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(0, 0, 0, Direction::D0), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 48, Direction::D2), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 0, Direction::D0), true);

        assert_eq!(probe(&world, BuildDirection::Next), NextSegmentOutcome::Ghost);
    }

    #[test]
    fn test_down_slope_is_accepted_via_begin_z_offset() {
        let mut world = world();
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(0, 0, 0, Direction::D0), false);
        // Gefälle mit Ursprung 16 über dem Ziel, plus ein fremdes Stück weiter oben
        place(&mut world, TrackType::DOWN_25, CoordsXYZD::new(32, 0, 16, Direction::D0), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 64, Direction::D0), true);

        assert_eq!(probe(&world, BuildDirection::Next), NextSegmentOutcome::Real);
    }

    #[test]
    fn test_mismatching_followers_yield_none() {
        let mut world = world();
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(0, 0, 0, Direction::D0), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 32, Direction::D2), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 64, Direction::D2), false);

        assert_eq!(probe(&world, BuildDirection::Next), NextSegmentOutcome::None);
    }

    #[test]
    fn test_exact_base_z_wins_among_several_acceptances() {
        let mut world = world();
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(0, 0, 0, Direction::D0), false);
        // Beide werden akzeptiert (16 − 16 = 0 bzw. 0 = 0), exakte Höhe gewinnt
        place(&mut world, TrackType::DOWN_25, CoordsXYZD::new(32, 0, 16, Direction::D0), false);
        place(&mut world, TrackType::FLAT, CoordsXYZD::new(32, 0, 0, Direction::D0), true);

        assert_eq!(probe(&world, BuildDirection::Next), NextSegmentOutcome::Ghost);
    }
}

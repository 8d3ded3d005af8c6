//! Bau-Zustand: was als Nächstes wohin gebaut würde.
//!
//! Das Ausführen eines Baus gehört nicht hierher; `finished()` liefert nur die
//! vollständige Anfrage, sobald alle Werte bekannt sind.

use crate::core::{BuildDirection, CoordsXYZD, RideId, RideType, Segment, TrackType, World};
use serde::{Deserialize, Serialize};

/// Vollständige Bau-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub ride: RideId,
    pub ride_type: RideType,
    pub track_type: TrackType,
    pub location: CoordsXYZD,
}

/// Gewählte Bau-Parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildState {
    /// Gewählte Baurichtung
    pub direction: Option<BuildDirection>,
    /// Zu bauender Track-Typ
    pub track_type: Option<TrackType>,
    pub ride: Option<RideId>,
    pub ride_type: Option<RideType>,
    /// Anschlusslage am Ende der Segment-Folge (vom Iterator)
    pub initial_build_location: Option<CoordsXYZD>,
    /// Ursprung des neuen Stücks, aus Anschlusslage und Track-Typ berechnet
    pub computed_build_location: Option<CoordsXYZD>,
}

impl BuildState {
    /// Erstellt einen leeren Bau-Zustand mit Baurichtung.
    pub fn new(direction: BuildDirection) -> Self {
        Self {
            direction: Some(direction),
            ..Self::default()
        }
    }

    /// Übernimmt Ride und Ride-Typ eines selektierten Segments.
    pub fn adopt_segment(&mut self, segment: &Segment) {
        self.ride = Some(segment.ride);
        self.ride_type = Some(segment.ride_type);
    }

    /// Verwirft alles außer Baurichtung und Track-Typ.
    pub fn clear_selection(&mut self) {
        self.ride = None;
        self.ride_type = None;
        self.initial_build_location = None;
        self.computed_build_location = None;
    }

    /// Setzt die Anschlusslage und berechnet den Ursprung des neuen Stücks.
    ///
    /// In Fahrtrichtung liegt der Ursprung um `begin_z` des Track-Typs über der
    /// Anschlusslage. Entgegen der Fahrtrichtung liefert der Iterator bereits
    /// einen Stück-Ursprung.
    pub fn set_initial_build_location<W: World + ?Sized>(
        &mut self,
        world: &W,
        location: Option<CoordsXYZD>,
    ) {
        self.initial_build_location = location;
        self.computed_build_location = match (self.direction, self.track_type, location) {
            (Some(BuildDirection::Next), Some(track_type), Some(location)) => {
                let begin_z = world
                    .track_piece(track_type)
                    .map(|info| info.begin_z)
                    .unwrap_or(0);
                Some(CoordsXYZD {
                    z: location.z + begin_z,
                    ..location
                })
            }
            (Some(BuildDirection::Previous), Some(_), Some(location)) => Some(location),
            (direction, track_type, location) => {
                log::debug!(
                    "Bauposition unvollständig: Richtung {:?}, Track-Typ {:?}, Lage {:?}",
                    direction,
                    track_type,
                    location
                );
                None
            }
        };
    }

    /// Vollständige Bau-Anfrage, sobald Ride, Ride-Typ, Track-Typ und Lage bekannt sind.
    pub fn finished(&self) -> Option<BuildRequest> {
        Some(BuildRequest {
            ride: self.ride?,
            ride_type: self.ride_type?,
            track_type: self.track_type?,
            location: self.computed_build_location?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, MemoryWorld};

    #[test]
    fn test_finished_requires_all_values() {
        let world = MemoryWorld::new();
        let mut build = BuildState::new(BuildDirection::Next);
        let location = CoordsXYZD::new(32, 0, 0, Direction::D0);

        build.set_initial_build_location(&world, Some(location));
        assert_eq!(build.computed_build_location, None);
        assert_eq!(build.finished(), None);

        build.track_type = Some(TrackType::FLAT);
        build.set_initial_build_location(&world, Some(location));
        assert_eq!(build.finished(), None);

        build.adopt_segment(&Segment::new(
            RideId(1),
            TrackType::UP_25,
            RideType(52),
            CoordsXYZD::new(0, 0, 0, Direction::D0),
        ));
        assert_eq!(
            build.finished(),
            Some(BuildRequest {
                ride: RideId(1),
                ride_type: RideType(52),
                track_type: TrackType::FLAT,
                location,
            })
        );
    }

    #[test]
    fn test_next_direction_lifts_origin_by_begin_z() {
        let world = MemoryWorld::new();
        let mut build = BuildState::new(BuildDirection::Next);
        build.track_type = Some(TrackType::DOWN_25);

        build.set_initial_build_location(&world, Some(CoordsXYZD::new(32, 0, 0, Direction::D0)));

        assert_eq!(
            build.computed_build_location,
            Some(CoordsXYZD::new(32, 0, 16, Direction::D0))
        );
    }
}

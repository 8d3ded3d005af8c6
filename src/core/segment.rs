//! Logisches Streckenstück (Segment) und die zugehörigen Kennungen.

use super::CoordsXYZD;
use serde::{Deserialize, Serialize};

/// Kennung eines Rides in der Welt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(pub u16);

impl std::fmt::Display for RideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ride-Typ (Achterbahn-Modell), wird unverändert aus dem Tile-Element übernommen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideType(pub u16);

/// Typ eines Streckenstücks (Gerade, Steigung, Kurve, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackType(pub u16);

impl TrackType {
    /// Gerades, flaches Stück
    pub const FLAT: TrackType = TrackType(0);
    /// Stationsende
    pub const END_STATION: TrackType = TrackType(1);
    /// Steigung 25°
    pub const UP_25: TrackType = TrackType(4);
    /// Gefälle 25°
    pub const DOWN_25: TrackType = TrackType(10);
    /// Linke Viertelkurve über 3 Kacheln
    pub const LEFT_QUARTER_TURN_3_TILES: TrackType = TrackType(42);
    /// Rechte Viertelkurve über 3 Kacheln
    pub const RIGHT_QUARTER_TURN_3_TILES: TrackType = TrackType(43);
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match *self {
            TrackType::FLAT => "Flat",
            TrackType::END_STATION => "EndStation",
            TrackType::UP_25 => "Up25",
            TrackType::DOWN_25 => "Down25",
            TrackType::LEFT_QUARTER_TURN_3_TILES => "LeftQuarterTurn3Tiles",
            TrackType::RIGHT_QUARTER_TURN_3_TILES => "RightQuarterTurn3Tiles",
            TrackType(other) => return write!(f, "TrackType({other})"),
        };
        f.write_str(name)
    }
}

/// Bau- bzw. Traversierungsrichtung entlang der Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildDirection {
    /// In Fahrtrichtung (Richtung, in der Wagen abgeschossen werden)
    #[default]
    Next,
    /// Entgegen der Fahrtrichtung
    Previous,
}

impl BuildDirection {
    /// Schrittweite des Selektionsindex in dieser Richtung.
    pub fn step(self) -> isize {
        match self {
            BuildDirection::Next => 1,
            BuildDirection::Previous => -1,
        }
    }
}

/// Ein aufgelöstes, logisches Streckenstück eines Rides.
///
/// Wertsemantik: ein Segment wird nie verändert, ein geändertes Segment ist ein neuer Wert.
/// Ein gültiges Segment entspricht genau einem Track-Element mit passendem Ride und passender Lage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Besitzender Ride
    pub ride: RideId,
    /// Typ des Streckenstücks
    pub track_type: TrackType,
    /// Ride-Typ
    pub ride_type: RideType,
    /// Ursprung des Stücks inkl. Ausrichtung
    pub location: CoordsXYZD,
}

impl Segment {
    /// Erstellt ein neues Segment.
    pub fn new(ride: RideId, track_type: TrackType, ride_type: RideType, location: CoordsXYZD) -> Self {
        Self {
            ride,
            track_type,
            ride_type,
            location,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ride {} at {}", self.track_type, self.ride, self.location)
    }
}

//! Schnittstelle zur Spielwelt: Kacheln, Track-Iterator und Metadaten.
//!
//! Die Welt ist ein externer Dienst. Der Assistent liest sie nur und cached
//! nichts über eine einzelne Aufrufkette hinaus.

use super::{CoordsXY, CoordsXYZD, RideId, TileElement, TrackType};
use serde::{Deserialize, Serialize};

/// Relativer Offset eines Kachel-Elements innerhalb eines Streckenstücks (Ausrichtung 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSegmentElement {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl TrackSegmentElement {
    /// Erstellt einen neuen relativen Offset.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Beschreibung des Streckenstücks an der aktuellen Iterator-Position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSegmentDescriptor {
    /// Typ des Stücks
    pub track_type: TrackType,
    /// Relative Offsets aller Kachel-Elemente (erstes Element = Ursprung)
    pub elements: Vec<TrackSegmentElement>,
    /// Vertikaler Versatz des logischen Ursprungs
    pub begin_z: i32,
}

/// Metadaten eines Streckenstück-Typs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPieceInfo {
    /// Vertikaler Versatz des logischen Ursprungs
    pub begin_z: i32,
    /// Vertikaler Versatz am Ende des Stücks
    pub end_z: i32,
}

/// Klassifizierung eines Rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideClassification {
    /// Streckengebundener Ride
    #[default]
    Ride,
    /// Verkaufsstand (kein Teil eines Streckengraphen)
    Stall,
    /// Sonstige Einrichtung (Toilette, Info, …)
    Facility,
}

/// Schrittweiser Iterator über den Streckengraphen eines Rides.
pub trait TrackIterator {
    /// Lage des aktuellen Stücks (Ursprung).
    fn position(&self) -> CoordsXYZD;

    /// Beschreibung des aktuellen Stücks, falls bekannt.
    fn segment(&self) -> Option<&TrackSegmentDescriptor>;

    /// Lage, die ein in Fahrtrichtung folgendes Stück einnehmen würde.
    fn next_position(&self) -> Option<CoordsXYZD>;

    /// Lage, die ein vorangehendes Stück einnehmen würde.
    fn previous_position(&self) -> Option<CoordsXYZD>;

    /// Springt zum folgenden Stück. `false` wenn dort keines existiert.
    fn advance(&mut self) -> bool;

    /// Springt zum vorangehenden Stück. `false` wenn dort keines existiert.
    fn retreat(&mut self) -> bool;
}

/// Lesender Zugriff auf die Spielwelt.
pub trait World {
    /// Geordnete Element-Liste der Kachel (Kachelkoordinaten, bereits durch 32 geteilt).
    fn tile(&self, tile_x: i32, tile_y: i32) -> Option<&[TileElement]>;

    /// Erzeugt einen Track-Iterator am Element `element_index` der Kachel unter `coords`.
    fn track_iterator(
        &self,
        coords: CoordsXY,
        element_index: usize,
    ) -> Option<Box<dyn TrackIterator + '_>>;

    /// Klassifizierung eines Rides, `None` wenn der Ride unbekannt ist.
    fn ride_classification(&self, ride: RideId) -> Option<RideClassification>;

    /// Metadaten eines Streckenstück-Typs.
    fn track_piece(&self, track_type: TrackType) -> Option<TrackPieceInfo>;
}

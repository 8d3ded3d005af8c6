//! Tile-Elemente: die Rohdaten einer Kachel, wie sie die Welt liefert.

use super::{CoordsXY, Direction, RideId, RideType, Segment, TrackType};
use serde::{Deserialize, Serialize};

/// Art eines Tile-Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileElementKind {
    Surface,
    Footpath,
    Track,
    SmallScenery,
    Other,
}

/// Oberflächen-Element (Gelände).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceElement {
    /// Geländehöhe in Welteinheiten
    pub base_z: i32,
}

/// Track-Element: ein Kachel-Teil eines (ggf. mehrkacheligen) Streckenstücks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackElement {
    /// Besitzender Ride
    pub ride: RideId,
    /// Ride-Typ
    pub ride_type: RideType,
    /// Typ des Streckenstücks
    pub track_type: TrackType,
    /// Basishöhe dieses Elements
    pub base_z: i32,
    /// Ausrichtung des Streckenstücks
    pub direction: Direction,
    /// Position innerhalb des mehrkacheligen Stücks (0 = Ursprung)
    pub sequence: u8,
    /// Entwurfs-Platzierung (Ghost) statt fest gebauter Strecke
    pub is_ghost: bool,
}

/// Ein Element in der geordneten Element-Liste einer Kachel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileElement {
    Surface(SurfaceElement),
    Footpath { base_z: i32 },
    Track(TrackElement),
    SmallScenery { base_z: i32 },
    Other,
}

impl TileElement {
    /// Art dieses Elements.
    pub fn kind(&self) -> TileElementKind {
        match self {
            TileElement::Surface(_) => TileElementKind::Surface,
            TileElement::Footpath { .. } => TileElementKind::Footpath,
            TileElement::Track(_) => TileElementKind::Track,
            TileElement::SmallScenery { .. } => TileElementKind::SmallScenery,
            TileElement::Other => TileElementKind::Other,
        }
    }

    /// Track-Daten, falls es sich um ein Track-Element handelt.
    pub fn as_track(&self) -> Option<&TrackElement> {
        match self {
            TileElement::Track(track) => Some(track),
            _ => None,
        }
    }

    /// Oberflächen-Daten, falls es sich um ein Surface-Element handelt.
    pub fn as_surface(&self) -> Option<&SurfaceElement> {
        match self {
            TileElement::Surface(surface) => Some(surface),
            _ => None,
        }
    }
}

/// Ein Tile-Element zusammen mit seinem Listenindex und den abgefragten Koordinaten.
///
/// Der `index` ist die Position in der *ungefilterten* Element-Liste der Kachel
/// und wird zum Erzeugen eines Track-Iterators benötigt.
#[derive(Debug, Clone, PartialEq)]
pub struct TileElementItem<T> {
    pub element: T,
    pub index: usize,
    pub coords: CoordsXY,
}

/// Track-Kandidat inklusive des vom Iterator aufgelösten Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackElementItem {
    /// Rohdaten des Track-Elements
    pub element: TrackElement,
    /// Index in der Element-Liste der Kachel
    pub index: usize,
    /// Abgefragte Weltkoordinaten (nicht durch die Kachelgröße geteilt)
    pub coords: CoordsXY,
    /// Aufgelöstes Segment (Ursprung des Stücks)
    pub segment: Segment,
}

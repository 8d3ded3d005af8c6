//! Katalog der Streckenstück-Geometrien für die In-Memory-Welt.

use super::{TrackPieceInfo, TrackSegmentDescriptor, TrackSegmentElement, TrackType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ausgang eines Streckenstücks relativ zum Ursprung (Ausrichtung 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceExit {
    /// Ursprung des Folgestücks relativ zum eigenen Ursprung
    pub offset: TrackSegmentElement,
    /// Richtungswechsel in Vierteldrehungen
    pub turn: u8,
}

/// Geometrie und Metadaten eines Streckenstück-Typs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPieceDef {
    /// Beschreibung, wie sie der Track-Iterator liefert
    pub descriptor: TrackSegmentDescriptor,
    /// Höhen-Metadaten
    pub info: TrackPieceInfo,
    /// Ausgang zum Folgestück
    pub exit: PieceExit,
}

impl TrackPieceDef {
    fn new(
        track_type: TrackType,
        elements: &[(i32, i32, i32)],
        begin_z: i32,
        end_z: i32,
        exit: (i32, i32, i32),
        turn: u8,
    ) -> Self {
        Self {
            descriptor: TrackSegmentDescriptor {
                track_type,
                elements: elements
                    .iter()
                    .map(|&(x, y, z)| TrackSegmentElement::new(x, y, z))
                    .collect(),
                begin_z,
            },
            info: TrackPieceInfo { begin_z, end_z },
            exit: PieceExit {
                offset: TrackSegmentElement::new(exit.0, exit.1, exit.2),
                turn,
            },
        }
    }

    /// Typ des Stücks.
    pub fn track_type(&self) -> TrackType {
        self.descriptor.track_type
    }
}

/// Nachschlagetabelle Track-Typ → Geometrie.
#[derive(Debug, Clone)]
pub struct TrackPieceCatalog {
    pieces: HashMap<TrackType, TrackPieceDef>,
}

impl Default for TrackPieceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TrackPieceCatalog {
    /// Leerer Katalog.
    pub fn empty() -> Self {
        Self {
            pieces: HashMap::new(),
        }
    }

    /// Katalog mit den eingebauten Standard-Stücken.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(TrackPieceDef::new(
            TrackType::FLAT,
            &[(0, 0, 0)],
            0,
            0,
            (32, 0, 0),
            0,
        ));
        catalog.insert(TrackPieceDef::new(
            TrackType::END_STATION,
            &[(0, 0, 0)],
            0,
            0,
            (32, 0, 0),
            0,
        ));
        catalog.insert(TrackPieceDef::new(
            TrackType::UP_25,
            &[(0, 0, 0)],
            0,
            16,
            (32, 0, 16),
            0,
        ));
        // Gefälle: logischer Ursprung liegt am oberen Ende
        catalog.insert(TrackPieceDef::new(
            TrackType::DOWN_25,
            &[(0, 0, 0)],
            16,
            0,
            (32, 0, -16),
            0,
        ));
        catalog.insert(TrackPieceDef::new(
            TrackType::LEFT_QUARTER_TURN_3_TILES,
            &[(0, 0, 0), (32, 0, 0), (32, 32, 0)],
            0,
            0,
            (32, 64, 0),
            3,
        ));
        catalog.insert(TrackPieceDef::new(
            TrackType::RIGHT_QUARTER_TURN_3_TILES,
            &[(0, 0, 0), (32, 0, 0), (32, -32, 0)],
            0,
            0,
            (32, -64, 0),
            1,
        ));
        catalog
    }

    /// Fügt eine Geometrie hinzu bzw. ersetzt eine bestehende.
    pub fn insert(&mut self, def: TrackPieceDef) {
        self.pieces.insert(def.track_type(), def);
    }

    /// Geometrie eines Track-Typs.
    pub fn get(&self, track_type: TrackType) -> Option<&TrackPieceDef> {
        self.pieces.get(&track_type)
    }

    /// Prüft ob der Track-Typ bekannt ist.
    pub fn contains(&self, track_type: TrackType) -> bool {
        self.pieces.contains_key(&track_type)
    }
}

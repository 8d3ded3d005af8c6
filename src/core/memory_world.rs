//! In-Memory-Welt: Kachel-Speicher und Track-Iterator für Fixtures, CLI und Tests.
//!
//! Die Kacheln werden aus der Liste platzierter Streckenstücke abgeleitet und bei
//! jeder Änderung neu aufgebaut. Jede belegte Kachel beginnt mit einem
//! Surface-Element, danach folgen Zusatz-Elemente und Track-Elemente in
//! Platzierungsreihenfolge.

use super::{
    CoordsXY, CoordsXYZD, RideClassification, RideId, RideType, SurfaceElement, TileElement,
    TrackElement, TrackIterator, TrackPieceCatalog, TrackPieceDef, TrackPieceInfo,
    TrackSegmentDescriptor, TrackType, World, TILE_SIZE,
};
use anyhow::bail;
use glam::IVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stammdaten eines Rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideRecord {
    pub id: RideId,
    pub ride_type: RideType,
    #[serde(default)]
    pub classification: RideClassification,
}

/// Ein platziertes Streckenstück.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPlacement {
    pub ride: RideId,
    pub track_type: TrackType,
    pub location: CoordsXYZD,
    #[serde(default)]
    pub is_ghost: bool,
}

/// Zusätzliches Tile-Element ohne Streckenbezug (Fußweg, Szenerie, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraElement {
    pub coords: CoordsXY,
    pub element: TileElement,
}

/// Serialisierbarer Zustand einer `MemoryWorld` (JSON-Fixture).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub rides: Vec<RideRecord>,
    pub placements: Vec<TrackPlacement>,
    #[serde(default)]
    pub extra_elements: Vec<ExtraElement>,
    #[serde(default)]
    pub surface_z: i32,
}

#[derive(Debug, Clone, Default)]
struct TileSlot {
    elements: Vec<TileElement>,
    /// Index der besitzenden Platzierung je Element (`None` für Nicht-Track)
    owners: Vec<Option<usize>>,
}

impl TileSlot {
    fn push(&mut self, element: TileElement, owner: Option<usize>) {
        self.elements.push(element);
        self.owners.push(owner);
    }
}

/// Vollständig im Speicher gehaltene Welt.
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    catalog: TrackPieceCatalog,
    rides: IndexMap<RideId, RideRecord>,
    placements: Vec<TrackPlacement>,
    extra_elements: Vec<ExtraElement>,
    surface_z: i32,
    tiles: HashMap<(i32, i32), TileSlot>,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWorld {
    /// Erstellt eine leere Welt mit dem eingebauten Stück-Katalog.
    pub fn new() -> Self {
        Self::with_catalog(TrackPieceCatalog::builtin())
    }

    /// Erstellt eine leere Welt mit eigenem Katalog.
    pub fn with_catalog(catalog: TrackPieceCatalog) -> Self {
        Self {
            catalog,
            rides: IndexMap::new(),
            placements: Vec::new(),
            extra_elements: Vec::new(),
            surface_z: 0,
            tiles: HashMap::new(),
        }
    }

    /// Baut eine Welt aus einem Snapshot auf.
    pub fn from_snapshot(snapshot: WorldSnapshot) -> anyhow::Result<Self> {
        let mut world = Self::new();
        world.surface_z = snapshot.surface_z;
        for ride in snapshot.rides {
            world.add_ride(ride);
        }
        world.extra_elements = snapshot.extra_elements;
        for placement in snapshot.placements {
            world.validate_placement(&placement)?;
            world.placements.push(placement);
        }
        world.rebuild_tiles();
        Ok(world)
    }

    /// Parst eine Welt aus einem JSON-Snapshot.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let snapshot: WorldSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Lädt eine Welt aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let world = Self::from_json(&content)?;
        log::info!(
            "Welt geladen aus {}: {} Rides, {} Streckenstücke",
            path.display(),
            world.rides.len(),
            world.placements.len()
        );
        Ok(world)
    }

    /// Aktueller Zustand als serialisierbarer Snapshot.
    pub fn to_snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            rides: self.rides.values().copied().collect(),
            placements: self.placements.clone(),
            extra_elements: self.extra_elements.clone(),
            surface_z: self.surface_z,
        }
    }

    /// Registriert einen Ride (ersetzt einen bestehenden mit gleicher ID).
    pub fn add_ride(&mut self, ride: RideRecord) {
        self.rides.insert(ride.id, ride);
        self.rebuild_tiles();
    }

    /// Fügt ein Nicht-Track-Element auf einer Kachel hinzu.
    pub fn add_extra_element(&mut self, coords: CoordsXY, element: TileElement) {
        self.extra_elements.push(ExtraElement { coords, element });
        self.rebuild_tiles();
    }

    /// Platziert ein Streckenstück.
    pub fn place_track(&mut self, placement: TrackPlacement) -> anyhow::Result<()> {
        self.validate_placement(&placement)?;
        self.placements.push(placement);
        self.rebuild_tiles();
        Ok(())
    }

    /// Entfernt das Streckenstück eines Rides mit exakt dieser Lage.
    pub fn remove_track(&mut self, ride: RideId, location: CoordsXYZD) -> Option<TrackPlacement> {
        let position = self
            .placements
            .iter()
            .position(|p| p.ride == ride && p.location == location)?;
        let removed = self.placements.remove(position);
        self.rebuild_tiles();
        Some(removed)
    }

    /// Setzt das Ghost-Flag eines Streckenstücks (Entwurf ↔ fest gebaut).
    pub fn set_ghost(&mut self, ride: RideId, location: CoordsXYZD, is_ghost: bool) -> bool {
        let Some(placement) = self
            .placements
            .iter_mut()
            .find(|p| p.ride == ride && p.location == location)
        else {
            return false;
        };
        placement.is_ghost = is_ghost;
        self.rebuild_tiles();
        true
    }

    /// Alle platzierten Streckenstücke in Platzierungsreihenfolge.
    pub fn placements(&self) -> &[TrackPlacement] {
        &self.placements
    }

    /// Der verwendete Stück-Katalog.
    pub fn catalog(&self) -> &TrackPieceCatalog {
        &self.catalog
    }

    fn validate_placement(&self, placement: &TrackPlacement) -> anyhow::Result<()> {
        if !self.catalog.contains(placement.track_type) {
            bail!(
                "Unbekannter Track-Typ {} bei {}",
                placement.track_type,
                placement.location
            );
        }
        if !self.rides.contains_key(&placement.ride) {
            bail!("Unbekannter Ride {} bei {}", placement.ride, placement.location);
        }
        Ok(())
    }

    /// Baut alle Kacheln aus Platzierungen und Zusatz-Elementen neu auf.
    fn rebuild_tiles(&mut self) {
        let mut tiles: HashMap<(i32, i32), TileSlot> = HashMap::new();
        let surface_z = self.surface_z;

        for extra in &self.extra_elements {
            Self::tile_slot(&mut tiles, extra.coords, surface_z).push(extra.element.clone(), None);
        }

        for (placement_index, placement) in self.placements.iter().enumerate() {
            let Some(def) = self.catalog.get(placement.track_type) else {
                continue;
            };
            let ride_type = self
                .rides
                .get(&placement.ride)
                .map(|ride| ride.ride_type)
                .unwrap_or_default();
            let direction = placement.location.direction;

            for (sequence, offset) in def.descriptor.elements.iter().enumerate() {
                let rotated = direction.rotate_offset(IVec2::new(offset.x, offset.y));
                let coords = placement.location.xy().offset(rotated);
                let element = TrackElement {
                    ride: placement.ride,
                    ride_type,
                    track_type: placement.track_type,
                    base_z: placement.location.z + offset.z,
                    direction,
                    sequence: sequence as u8,
                    is_ghost: placement.is_ghost,
                };
                Self::tile_slot(&mut tiles, coords, surface_z)
                    .push(TileElement::Track(element), Some(placement_index));
            }
        }

        self.tiles = tiles;
    }

    fn tile_slot(
        tiles: &mut HashMap<(i32, i32), TileSlot>,
        coords: CoordsXY,
        surface_z: i32,
    ) -> &mut TileSlot {
        tiles.entry(coords.to_tile()).or_insert_with(|| {
            let mut slot = TileSlot::default();
            slot.push(
                TileElement::Surface(SurfaceElement { base_z: surface_z }),
                None,
            );
            slot
        })
    }

    fn piece_def(&self, placement: &TrackPlacement) -> Option<&TrackPieceDef> {
        self.catalog.get(placement.track_type)
    }

    /// Lage, die ein an `placement` anschließendes Stück einnehmen würde.
    fn exit_of(&self, placement: &TrackPlacement) -> Option<CoordsXYZD> {
        let def = self.piece_def(placement)?;
        let location = placement.location;
        let exit = def.exit;
        let rotated = location
            .direction
            .rotate_offset(IVec2::new(exit.offset.x, exit.offset.y));
        Some(CoordsXYZD::new(
            location.x + rotated.x,
            location.y + rotated.y,
            location.z + exit.offset.z,
            location.direction.rotated(exit.turn),
        ))
    }

    fn successor_of(&self, placement_index: usize) -> Option<usize> {
        let placement = self.placements.get(placement_index)?;
        let target = self.exit_of(placement)?;
        self.placements
            .iter()
            .position(|other| other.ride == placement.ride && other.location == target)
    }

    fn predecessor_of(&self, placement_index: usize) -> Option<usize> {
        let placement = self.placements.get(placement_index)?;
        self.placements.iter().position(|other| {
            other.ride == placement.ride && self.exit_of(other) == Some(placement.location)
        })
    }
}

impl World for MemoryWorld {
    fn tile(&self, tile_x: i32, tile_y: i32) -> Option<&[TileElement]> {
        self.tiles
            .get(&(tile_x, tile_y))
            .map(|slot| slot.elements.as_slice())
    }

    fn track_iterator(
        &self,
        coords: CoordsXY,
        element_index: usize,
    ) -> Option<Box<dyn TrackIterator + '_>> {
        let slot = self.tiles.get(&coords.to_tile())?;
        let owner = slot.owners.get(element_index).copied().flatten()?;
        Some(Box::new(MemoryTrackIterator {
            world: self,
            current: owner,
        }))
    }

    fn ride_classification(&self, ride: RideId) -> Option<RideClassification> {
        self.rides.get(&ride).map(|record| record.classification)
    }

    fn track_piece(&self, track_type: TrackType) -> Option<TrackPieceInfo> {
        self.catalog.get(track_type).map(|def| def.info)
    }
}

/// Track-Iterator über die Platzierungen einer `MemoryWorld`.
///
/// Steht immer auf dem Ursprung eines Stücks, auch wenn er über ein
/// Folge-Element eines mehrkacheligen Stücks erzeugt wurde.
pub struct MemoryTrackIterator<'w> {
    world: &'w MemoryWorld,
    current: usize,
}

impl MemoryTrackIterator<'_> {
    fn placement(&self) -> &TrackPlacement {
        &self.world.placements[self.current]
    }
}

impl TrackIterator for MemoryTrackIterator<'_> {
    fn position(&self) -> CoordsXYZD {
        self.placement().location
    }

    fn segment(&self) -> Option<&TrackSegmentDescriptor> {
        self.world
            .piece_def(self.placement())
            .map(|def| &def.descriptor)
    }

    fn next_position(&self) -> Option<CoordsXYZD> {
        self.world.exit_of(self.placement())
    }

    fn previous_position(&self) -> Option<CoordsXYZD> {
        if let Some(previous) = self.world.predecessor_of(self.current) {
            return Some(self.world.placements[previous].location);
        }
        // Ohne Vorgänger: Lage eines geraden Stücks direkt davor
        let location = self.placement().location;
        let back = location
            .direction
            .rotate_offset(IVec2::new(-TILE_SIZE, 0));
        Some(CoordsXYZD::new(
            location.x + back.x,
            location.y + back.y,
            location.z,
            location.direction,
        ))
    }

    fn advance(&mut self) -> bool {
        match self.world.successor_of(self.current) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    fn retreat(&mut self) -> bool {
        match self.world.predecessor_of(self.current) {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

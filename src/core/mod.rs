//! Core-Domänentypen: Koordinaten, Segmente, Tile-Elemente und die Welt-Schnittstelle.

pub mod coords;
pub mod memory_world;
/// Logische Streckenstücke
///
/// Dieses Modul definiert die Kennungen und das Segment selbst:
/// - Segment: aufgelöstes Streckenstück (Ride, Typ, Lage)
/// - RideId / RideType / TrackType: Kennungen aus den Tile-Elementen
/// - BuildDirection: Traversierungsrichtung
pub mod segment;
pub mod tile_element;
pub mod track_piece;
pub mod world;

pub use coords::{CoordsXY, CoordsXYZ, CoordsXYZD, Direction, TILE_SIZE};
pub use memory_world::{
    ExtraElement, MemoryTrackIterator, MemoryWorld, RideRecord, TrackPlacement, WorldSnapshot,
};
pub use segment::{BuildDirection, RideId, RideType, Segment, TrackType};
pub use tile_element::{
    SurfaceElement, TileElement, TileElementItem, TileElementKind, TrackElement,
    TrackElementItem,
};
pub use track_piece::{PieceExit, TrackPieceCatalog, TrackPieceDef};
pub use world::{
    RideClassification, TrackIterator, TrackPieceInfo, TrackSegmentDescriptor,
    TrackSegmentElement, World,
};

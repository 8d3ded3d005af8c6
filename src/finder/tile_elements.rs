//! Kachel-Abfragen: Tile-Elemente einer Art und Track-Kandidaten mit Segment.

use crate::core::{
    CoordsXY, RideClassification, RideId, Segment, SurfaceElement, TileElement, TileElementItem,
    TileElementKind, TrackElement, TrackElementItem, World,
};

/// Liefert alle Elemente einer Art auf der Kachel unter `coords`.
///
/// `coords` sind Weltkoordinaten (noch nicht durch 32 geteilt). Reihenfolge und
/// Listenindex bleiben erhalten, der Index wird nach dem Filtern nicht neu vergeben.
pub fn get_tile_elements<W: World + ?Sized>(
    world: &W,
    kind: TileElementKind,
    coords: CoordsXY,
) -> Vec<TileElementItem<TileElement>> {
    let (tile_x, tile_y) = coords.to_tile();
    let Some(elements) = world.tile(tile_x, tile_y) else {
        return Vec::new();
    };

    elements
        .iter()
        .enumerate()
        .filter(|(_, element)| element.kind() == kind)
        .map(|(index, element)| TileElementItem {
            element: element.clone(),
            index,
            coords,
        })
        .collect()
}

/// Liefert alle Oberflächen-Elemente unter `coords`.
pub fn get_surface_elements<W: World + ?Sized>(
    world: &W,
    coords: CoordsXY,
) -> Vec<TileElementItem<SurfaceElement>> {
    get_tile_elements(world, TileElementKind::Surface, coords)
        .into_iter()
        .filter_map(|item| {
            let surface = *item.element.as_surface()?;
            Some(TileElementItem {
                element: surface,
                index: item.index,
                coords: item.coords,
            })
        })
        .collect()
}

/// Prüft ob ein Ride ein Verkaufsstand ist (kein Teil eines Streckengraphen).
pub fn is_ride_a_stall<W: World + ?Sized>(world: &W, ride: RideId) -> bool {
    world.ride_classification(ride) == Some(RideClassification::Stall)
}

/// Liefert alle Track-Kandidaten unter `coords` inklusive aufgelöstem Segment.
///
/// Verkaufsstände werden verworfen. Kandidaten, für die die Welt keinen Iterator
/// oder keine Segment-Beschreibung liefert, werden mit Diagnose übersprungen;
/// das ist mitten im Bearbeiten ein normaler Zustand, kein Fehler.
pub fn get_track_elements<W: World + ?Sized>(world: &W, coords: CoordsXY) -> Vec<TrackElementItem> {
    get_tile_elements(world, TileElementKind::Track, coords)
        .into_iter()
        .filter_map(|item| {
            let element = *item.element.as_track()?;
            if is_ride_a_stall(world, element.ride) {
                return None;
            }
            segment_from_track_element(world, &element, item.index, item.coords).map(|segment| {
                TrackElementItem {
                    element,
                    index: item.index,
                    coords: item.coords,
                    segment,
                }
            })
        })
        .collect()
}

/// Ermittelt das Segment hinter einem Track-Element über einen frischen Iterator.
fn segment_from_track_element<W: World + ?Sized>(
    world: &W,
    element: &TrackElement,
    index: usize,
    coords: CoordsXY,
) -> Option<Segment> {
    let Some(iterator) = world.track_iterator(coords, index) else {
        log::debug!(
            "Kein Track-Iterator für ({}, {}) Index {}",
            coords.x,
            coords.y,
            index
        );
        return None;
    };
    let Some(descriptor) = iterator.segment() else {
        log::debug!(
            "Keine Segment-Beschreibung für ({}, {}) Index {}",
            coords.x,
            coords.y,
            index
        );
        return None;
    };

    Some(Segment::new(
        element.ride,
        descriptor.track_type,
        element.ride_type,
        iterator.position(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        CoordsXYZD, Direction, MemoryWorld, RideRecord, RideType, TrackIterator, TrackPieceInfo,
        TrackPlacement, TrackSegmentDescriptor, TrackType,
    };
    use crate::finder::{resolve_segment, NotFoundReason, Resolution};

    /// Welt mit einem Track-Element bei (64, 64), deren Iterator-Seite versagt.
    struct BrokenWorld {
        elements: Vec<TileElement>,
        without_descriptor: bool,
    }

    impl BrokenWorld {
        fn new(without_descriptor: bool) -> Self {
            Self {
                elements: vec![
                    TileElement::Surface(SurfaceElement { base_z: 0 }),
                    TileElement::Track(TrackElement {
                        ride: RideId(3),
                        ride_type: RideType(52),
                        track_type: TrackType::FLAT,
                        base_z: 0,
                        direction: Direction::D0,
                        sequence: 0,
                        is_ghost: false,
                    }),
                ],
                without_descriptor,
            }
        }
    }

    /// Iterator ohne Segment-Beschreibung.
    struct BlankIterator;

    impl TrackIterator for BlankIterator {
        fn position(&self) -> CoordsXYZD {
            CoordsXYZD::new(64, 64, 0, Direction::D0)
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

    impl World for BrokenWorld {
        fn tile(&self, tile_x: i32, tile_y: i32) -> Option<&[TileElement]> {
            ((tile_x, tile_y) == (2, 2)).then_some(self.elements.as_slice())
        }

        fn track_iterator(
            &self,
            _coords: CoordsXY,
            _element_index: usize,
        ) -> Option<Box<dyn TrackIterator + '_>> {
            if self.without_descriptor {
                Some(Box::new(BlankIterator))
            } else {
                None
            }
        }

        fn ride_classification(&self, _ride: RideId) -> Option<RideClassification> {
            Some(RideClassification::Ride)
        }

        fn track_piece(&self, _track_type: TrackType) -> Option<TrackPieceInfo> {
            None
        }
    }

    fn world() -> MemoryWorld {
        let mut world = MemoryWorld::new();
        world.add_ride(RideRecord {
            id: RideId(3),
            ride_type: RideType(52),
            classification: RideClassification::Ride,
        });
        world.add_ride(RideRecord {
            id: RideId(9),
            ride_type: RideType(28),
            classification: RideClassification::Stall,
        });
        world
    }

    fn place(world: &mut MemoryWorld, ride: u16, x: i32, y: i32) {
        world
            .place_track(TrackPlacement {
                ride: RideId(ride),
                track_type: TrackType::FLAT,
                location: CoordsXYZD::new(x, y, 0, Direction::D0),
                is_ghost: false,
            })
            .expect("Platzierung erwartet");
    }

    #[test]
    fn test_filtering_keeps_tile_list_index() {
        let mut world = world();
        world.add_extra_element(CoordsXY::new(32, 32), TileElement::Footpath { base_z: 0 });
        place(&mut world, 3, 32, 32);

        let items = get_tile_elements(&world, TileElementKind::Track, CoordsXY::new(32, 32));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].index, 2);
    }

    #[test]
    fn test_empty_tile_yields_no_elements() {
        let world = world();

        assert!(get_tile_elements(&world, TileElementKind::Surface, CoordsXY::new(0, 0)).is_empty());
        assert!(get_track_elements(&world, CoordsXY::new(0, 0)).is_empty());
    }

    #[test]
    fn test_stalls_are_excluded_from_track_query() {
        let mut world = world();
        place(&mut world, 9, 64, 64);
        place(&mut world, 3, 64, 64);

        let items = get_track_elements(&world, CoordsXY::new(64, 64));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].element.ride, RideId(3));
        assert_eq!(items[0].segment.location, CoordsXYZD::new(64, 64, 0, Direction::D0));
    }

    #[test]
    fn test_candidate_without_iterator_is_dropped() {
        let world = BrokenWorld::new(false);
        let coords = CoordsXYZD::new(64, 64, 0, Direction::D0);

        assert_eq!(
            get_tile_elements(&world, TileElementKind::Track, coords.xy()).len(),
            1
        );
        assert!(get_track_elements(&world, coords.xy()).is_empty());
        assert_eq!(
            resolve_segment(&world, RideId(3), coords),
            Resolution::NotFound(NotFoundReason::UnreadableTrack)
        );
    }

    #[test]
    fn test_candidate_without_segment_descriptor_is_dropped() {
        let world = BrokenWorld::new(true);
        let coords = CoordsXYZD::new(64, 64, 0, Direction::D0);

        assert!(get_track_elements(&world, coords.xy()).is_empty());
        assert_eq!(
            resolve_segment(&world, RideId(3), coords),
            Resolution::NotFound(NotFoundReason::UnreadableTrack)
        );
    }

    #[test]
    fn test_surface_query_returns_surface_first() {
        let mut world = world();
        place(&mut world, 3, 0, 0);

        let surfaces = get_surface_elements(&world, CoordsXY::new(0, 0));

        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].index, 0);
    }
}

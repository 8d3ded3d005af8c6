//! Segment-Auflösung: wählt unter überlappenden Track-Elementen das richtige aus.
//!
//! Eine Kachel kann Ursprung mehrerer physisch verschiedener Stücke desselben
//! Rides sein (Helixe, gestapelte Strecke, Übergangsstücke). Richtung und Höhe
//! reichen meist zur Unterscheidung, aber nicht immer; daher die mehrstufige
//! Filter-Pipeline in [`resolve_segment`].

use super::{get_tile_elements, get_track_elements, is_ride_a_stall};
use crate::core::{
    CoordsXYZD, RideId, Segment, TileElementKind, TrackElementItem, TrackIterator, World,
};
use glam::IVec2;

/// Grund, warum kein Element gefunden wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Auf der Kachel liegt gar kein Track-Element
    EmptyTile,
    /// Track liegt auf der Kachel, aber die Welt liefert weder Iterator noch Beschreibung
    UnreadableTrack,
    /// Track vorhanden, aber keiner gehört zum gesuchten Ride
    NoTrackForRide,
    /// Mehrere Kandidaten, aber die Filter-Pipeline hat alle verworfen
    TieBreakExhausted,
}

/// Regel, mit der ein mehrdeutiger Treffer entschieden wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreakRule {
    /// Richtung und z stimmen überein
    DirectionAndZ,
    /// Nur x, y und z stimmen überein (Richtung ignoriert, reduzierte Sicherheit)
    PositionOnly,
    /// Zwei identische Track-Typen, beliebiger gewählt
    DuplicateTrackType,
    /// Zusätzlich über exakte x/y-Übereinstimmung eingegrenzt
    ExactXY,
}

/// Ergebnis einer Segment-Auflösung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Kein passendes Element
    NotFound(NotFoundReason),
    /// Genau ein Kandidat für den Ride
    Resolved(TrackElementItem),
    /// Mehrere Kandidaten, per Regel entschieden
    Ambiguous {
        item: TrackElementItem,
        rule: TieBreakRule,
    },
}

impl Resolution {
    /// Gefundenes Element, unabhängig davon ob eindeutig oder entschieden.
    pub fn item(&self) -> Option<&TrackElementItem> {
        match self {
            Resolution::NotFound(_) => None,
            Resolution::Resolved(item) | Resolution::Ambiguous { item, .. } => Some(item),
        }
    }

    /// Konsumiert das Ergebnis und liefert das gefundene Element.
    pub fn into_item(self) -> Option<TrackElementItem> {
        match self {
            Resolution::NotFound(_) => None,
            Resolution::Resolved(item) | Resolution::Ambiguous { item, .. } => Some(item),
        }
    }

    /// Aufgelöstes Segment des gefundenen Elements.
    pub fn segment(&self) -> Option<Segment> {
        self.item().map(|item| item.segment)
    }

    /// `true` wenn ein Element gefunden wurde.
    pub fn is_found(&self) -> bool {
        self.item().is_some()
    }
}

/// Löst Ride + exakte Lage zum passenden Track-Element auf.
///
/// Pipeline bei mehreren Kandidaten:
/// 1. Richtung und z gleich
/// 2. sonst (keiner aus 1.): x, y und z gleich, Richtung ignoriert
/// 3. genau zwei Treffer mit gleichem Track-Typ: der erste
/// 4. mehr als ein Treffer: auf exakte x/y-Übereinstimmung eingrenzen
/// 5. erster verbleibender Treffer, sonst `TieBreakExhausted`
pub fn resolve_segment<W: World + ?Sized>(
    world: &W,
    ride: RideId,
    coords: CoordsXYZD,
) -> Resolution {
    let on_tile = get_track_elements(world, coords.xy());
    if on_tile.is_empty() {
        let unreadable = get_tile_elements(world, TileElementKind::Track, coords.xy())
            .iter()
            .filter_map(|item| item.element.as_track())
            .filter(|track| !is_ride_a_stall(world, track.ride))
            .count();
        if unreadable > 0 {
            log::warn!(
                "{} Track-Element(e) bei ({}, {}) ohne Iterator oder Segment-Beschreibung",
                unreadable,
                coords.x,
                coords.y
            );
            return Resolution::NotFound(NotFoundReason::UnreadableTrack);
        }
        log::debug!("Keine Track-Elemente bei ({}, {})", coords.x, coords.y);
        return Resolution::NotFound(NotFoundReason::EmptyTile);
    }

    let for_ride: Vec<TrackElementItem> = on_tile
        .into_iter()
        .filter(|item| item.element.ride == ride)
        .collect();

    match for_ride.as_slice() {
        [] => {
            log::debug!(
                "Keine Track-Elemente für Ride {} bei ({}, {})",
                ride,
                coords.x,
                coords.y
            );
            Resolution::NotFound(NotFoundReason::NoTrackForRide)
        }
        [single] => Resolution::Resolved(*single),
        candidates => break_tie(candidates, coords),
    }
}

fn break_tie(candidates: &[TrackElementItem], coords: CoordsXYZD) -> Resolution {
    let mut rule = TieBreakRule::DirectionAndZ;
    let mut chosen: Vec<&TrackElementItem> = candidates
        .iter()
        .filter(|item| {
            let location = item.segment.location;
            location.direction == coords.direction && location.z == coords.z
        })
        .collect();

    if chosen.is_empty() {
        chosen = candidates
            .iter()
            .filter(|item| item.segment.location.same_position(coords))
            .collect();
        if !chosen.is_empty() {
            rule = TieBreakRule::PositionOnly;
            log::debug!(
                "x, y und z stimmen bei {} überein, die Richtung nicht: {} Kandidat(en) mit reduzierter Sicherheit",
                coords,
                chosen.len()
            );
        }
    }

    if chosen.len() == 2 && chosen[0].element.track_type == chosen[1].element.track_type {
        log::debug!(
            "Zwei identische {} bei {}, nehme den ersten",
            chosen[0].element.track_type,
            coords
        );
        return Resolution::Ambiguous {
            item: *chosen[0],
            rule: TieBreakRule::DuplicateTrackType,
        };
    }

    if chosen.len() > 1 {
        chosen.retain(|item| {
            let location = item.segment.location;
            location.x == coords.x && location.y == coords.y
        });
        rule = TieBreakRule::ExactXY;
    }

    match chosen.first() {
        Some(item) => {
            log::debug!(
                "Mehrdeutige Kachel bei {}: {} gewählt ({:?})",
                coords,
                item.segment,
                rule
            );
            Resolution::Ambiguous { item: **item, rule }
        }
        None => {
            log::warn!(
                "Inkonsistenz bei {}: {} Kandidaten, aber keiner passt zu Richtung/Höhe/Position",
                coords,
                candidates.len()
            );
            Resolution::NotFound(NotFoundReason::TieBreakExhausted)
        }
    }
}

/// Absolute Lagen aller Kachel-Elemente eines (ggf. mehrkacheligen) Segments.
///
/// Die relativen Offsets stammen aus der Segment-Beschreibung des Iterators und
/// werden mit der Ausrichtung des Segments rotiert; z und Richtung bleiben gleich.
pub fn element_locations_of_segment(
    segment: &Segment,
    iterator: &dyn TrackIterator,
) -> Vec<CoordsXYZD> {
    let Some(descriptor) = iterator.segment() else {
        log::debug!("Segment {} hat keine Element-Beschreibung", segment);
        return Vec::new();
    };

    let origin = segment.location;
    descriptor
        .elements
        .iter()
        .map(|element| {
            let rotated = origin
                .direction
                .rotate_offset(IVec2::new(element.x, element.y));
            CoordsXYZD::new(
                origin.x + rotated.x,
                origin.y + rotated.y,
                origin.z,
                origin.direction,
            )
        })
        .collect()
}

/// Liefert alle Track-Elemente eines mehrkacheligen Segments.
///
/// Nicht auflösbare Lagen werden übersprungen.
pub fn resolve_all_elements_of_segment<W: World + ?Sized>(
    world: &W,
    segment: &Segment,
    iterator: &dyn TrackIterator,
) -> Vec<TrackElementItem> {
    element_locations_of_segment(segment, iterator)
        .into_iter()
        .filter_map(|location| resolve_segment(world, segment.ride, location).into_item())
        .collect()
}

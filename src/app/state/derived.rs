//! Aus der Selektion abgeleitete Werte (Iterator-Lage, Nachbarn, Positionen).

use super::SegmentCursor;
use crate::core::{BuildDirection, CoordsXYZD, World};
use crate::finder::{iterator_at, probe_next_segment, NextSegmentOutcome};

/// Abgeleiteter Zustand der aktuellen Selektion.
///
/// Wird nach jeder Cursor-Änderung komplett neu berechnet, in fester Reihenfolge:
/// Selektion → Iterator an der Selektion → Nachbar-Prüfung → rohe Positionen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionDerived {
    /// Lage des Iterators an der Selektion
    pub iterator_position: Option<CoordsXYZD>,
    /// Was in Fahrtrichtung hinter der Selektion liegt
    pub next_outcome: NextSegmentOutcome,
    /// Was entgegen der Fahrtrichtung vor der Selektion liegt
    pub previous_outcome: NextSegmentOutcome,
    pub next_position: Option<CoordsXYZD>,
    pub previous_position: Option<CoordsXYZD>,
    /// Cursor kann in Fahrtrichtung weiter
    pub has_next: bool,
    /// Cursor kann entgegen der Fahrtrichtung weiter
    pub has_previous: bool,
}

impl SelectionDerived {
    /// Berechnet alle Werte aus Cursor und Welt.
    pub fn compute<W: World + ?Sized>(world: &W, cursor: &SegmentCursor) -> Self {
        let has_next = cursor.has_next();
        let has_previous = cursor.has_previous();
        let Some(selected) = cursor.selected_segment() else {
            return Self::default();
        };

        let Some(iterator) = iterator_at(world, selected) else {
            log::debug!("Kein Iterator an der Selektion {}", selected);
            return Self {
                has_next,
                has_previous,
                ..Self::default()
            };
        };

        let next_outcome = probe_next_segment(
            world,
            Some(selected),
            iterator.as_ref(),
            Some(BuildDirection::Next),
        );
        let previous_outcome = probe_next_segment(
            world,
            Some(selected),
            iterator.as_ref(),
            Some(BuildDirection::Previous),
        );

        Self {
            iterator_position: Some(iterator.position()),
            next_outcome,
            previous_outcome,
            next_position: iterator.next_position(),
            previous_position: iterator.previous_position(),
            has_next,
            has_previous,
        }
    }

    /// Ergebnis der Nachbar-Prüfung in einer Richtung.
    pub fn outcome(&self, direction: BuildDirection) -> NextSegmentOutcome {
        match direction {
            BuildDirection::Next => self.next_outcome,
            BuildDirection::Previous => self.previous_outcome,
        }
    }
}

//! Cursor über einer Segment-Folge mit Rundkurs-Umlauf.

use crate::core::{BuildDirection, CoordsXYZD, Segment, World};
use crate::finder::{create_segment_sequence, iterator_at, SegmentSequence};

/// Angeforderter Index liegt außerhalb einer offenen Folge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutOfBounds {
    /// Angeforderter Index
    pub index: isize,
    /// Länge der Folge zum Zeitpunkt der Anfrage
    pub len: usize,
}

impl std::fmt::Display for SelectionOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Index {} außerhalb der Segment-Folge (Länge {})",
            self.index, self.len
        )
    }
}

impl std::error::Error for SelectionOutOfBounds {}

/// Selektion innerhalb einer zusammenhängenden Segment-Folge.
///
/// Index und selektiertes Segment werden nur gemeinsam über `set_selected`
/// geändert, damit sie nie auseinanderlaufen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentCursor {
    sequence: Vec<Segment>,
    selected_index: usize,
    selected_segment: Option<Segment>,
    is_complete_circuit: bool,
}

impl SegmentCursor {
    /// Erstellt einen leeren Cursor ohne Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Folge um `initial` neu auf und selektiert `initial`.
    ///
    /// Ohne Start-Segment passiert nichts. Gibt `true` zurück, wenn die Folge ersetzt wurde.
    pub fn rebuild<W: World + ?Sized>(
        &mut self,
        world: &W,
        initial: Option<Segment>,
        max_length: usize,
    ) -> bool {
        let Some(initial) = initial else {
            log::debug!("Kein Start-Segment, Segment-Folge bleibt unverändert");
            return false;
        };
        let Some(sequence) = create_segment_sequence(world, &initial, max_length) else {
            log::debug!("Keine Segment-Folge ab {} aufbaubar", initial);
            return false;
        };
        self.replace_sequence(sequence);
        true
    }

    /// Übernimmt eine fertige Folge und selektiert deren Start-Segment.
    pub fn replace_sequence(&mut self, sequence: SegmentSequence) {
        let SegmentSequence {
            segments,
            initial_index,
            is_complete_circuit,
        } = sequence;

        self.selected_segment = segments.get(initial_index).copied();
        self.selected_index = if self.selected_segment.is_some() {
            initial_index
        } else {
            0
        };
        self.sequence = segments;
        self.is_complete_circuit = is_complete_circuit;
    }

    /// Verwirft Folge und Selektion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Alle Segmente der Folge in Fahrtrichtung.
    pub fn sequence(&self) -> &[Segment] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Index der Selektion, `None` ohne Selektion.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_segment.map(|_| self.selected_index)
    }

    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selected_segment.as_ref()
    }

    pub fn is_complete_circuit(&self) -> bool {
        self.is_complete_circuit
    }

    /// Ob ein Schritt in Fahrtrichtung möglich ist.
    pub fn has_next(&self) -> bool {
        if self.selected_segment.is_none() {
            return false;
        }
        self.selected_index + 1 < self.sequence.len() || self.is_complete_circuit
    }

    /// Ob ein Schritt entgegen der Fahrtrichtung möglich ist.
    pub fn has_previous(&self) -> bool {
        if self.selected_segment.is_none() {
            return false;
        }
        self.selected_index > 0 || self.is_complete_circuit
    }

    /// Verschiebt die Selektion um einen Schritt. `false` wenn das nicht geht.
    pub fn move_selection(&mut self, direction: BuildDirection) -> bool {
        if self.selected_segment.is_none() {
            log::debug!("Keine Selektion, Schritt {:?} ignoriert", direction);
            return false;
        }
        let target = self.selected_index as isize + direction.step();
        match self.set_selected(target) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("Schritt {:?} nicht möglich: {}", direction, e);
                false
            }
        }
    }

    /// Selektiert den Index `index`.
    ///
    /// Auf einem Rundkurs springt ein Index unter 0 auf das letzte und ein Index
    /// ab der Länge auf das erste Segment (kein Modulo: -5 landet auch auf dem
    /// letzten). Auf offenen Folgen wird ein ungültiger Index abgelehnt und der
    /// Zustand bleibt unverändert.
    pub fn set_selected(&mut self, index: isize) -> Result<usize, SelectionOutOfBounds> {
        let len = self.sequence.len();
        let out_of_bounds = SelectionOutOfBounds { index, len };
        if len == 0 {
            return Err(out_of_bounds);
        }

        let target = if self.is_complete_circuit {
            if index < 0 {
                len - 1
            } else if index as usize >= len {
                0
            } else {
                index as usize
            }
        } else if index < 0 || index as usize >= len {
            return Err(out_of_bounds);
        } else {
            index as usize
        };

        self.selected_index = target;
        self.selected_segment = Some(self.sequence[target]);
        Ok(target)
    }

    /// Lage, an der ein neues Stück am Ende der Folge in `direction` anschließen würde.
    ///
    /// Erzeugt jedes Mal einen frischen Iterator am letzten (Next) bzw. ersten
    /// (Previous) Segment; der Cursor selbst wird nicht verändert.
    pub fn build_location_for<W: World + ?Sized>(
        &self,
        world: &W,
        direction: BuildDirection,
    ) -> Option<CoordsXYZD> {
        let end = match direction {
            BuildDirection::Next => self.sequence.last(),
            BuildDirection::Previous => self.sequence.first(),
        };
        let Some(end) = end else {
            log::debug!("Leere Segment-Folge, keine Bauposition {:?}", direction);
            return None;
        };
        log::debug!("Endsegment für Bauposition {:?}: {}", direction, end);

        let Some(iterator) = iterator_at(world, end) else {
            log::debug!("Kein Iterator am Endsegment {}", end);
            return None;
        };
        match direction {
            BuildDirection::Next => iterator.next_position(),
            BuildDirection::Previous => iterator.previous_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, RideId, RideType, TrackType};

    fn segment(x: i32) -> Segment {
        Segment::new(
            RideId(1),
            TrackType::FLAT,
            RideType(52),
            CoordsXYZD::new(x, 0, 0, Direction::D0),
        )
    }

    fn cursor(len: i32, initial_index: usize, is_complete_circuit: bool) -> SegmentCursor {
        let mut cursor = SegmentCursor::new();
        cursor.replace_sequence(SegmentSequence {
            segments: (0..len).map(|i| segment(i * 32)).collect(),
            initial_index,
            is_complete_circuit,
        });
        cursor
    }

    #[test]
    fn test_empty_cursor_has_no_neighbours() {
        let mut cursor = SegmentCursor::new();

        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert!(!cursor.move_selection(BuildDirection::Next));
        assert_eq!(cursor.set_selected(0), Err(SelectionOutOfBounds { index: 0, len: 0 }));
        assert_eq!(cursor.selected_index(), None);
    }

    #[test]
    fn test_open_sequence_rejects_out_of_range_without_change() {
        let mut cursor = cursor(3, 0, false);

        assert_eq!(cursor.set_selected(-1), Err(SelectionOutOfBounds { index: -1, len: 3 }));
        assert_eq!(cursor.set_selected(3), Err(SelectionOutOfBounds { index: 3, len: 3 }));
        assert_eq!(cursor.selected_index(), Some(0));
        assert_eq!(cursor.selected_segment(), Some(&segment(0)));

        assert!(!cursor.has_previous());
        assert!(cursor.has_next());
        assert!(!cursor.move_selection(BuildDirection::Previous));
        assert!(cursor.move_selection(BuildDirection::Next));
        assert_eq!(cursor.selected_segment(), Some(&segment(32)));
    }

    #[test]
    fn test_previous_is_available_past_the_first_segment() {
        let cursor = cursor(3, 2, false);

        assert!(cursor.has_previous());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_circuit_wraps_to_the_ends_without_modulo() {
        let mut cursor = cursor(4, 0, true);

        assert_eq!(cursor.set_selected(-1), Ok(3));
        assert_eq!(cursor.selected_segment(), Some(&segment(96)));
        assert_eq!(cursor.set_selected(-5), Ok(3));
        assert_eq!(cursor.set_selected(4), Ok(0));
        assert_eq!(cursor.set_selected(9), Ok(0));
        assert_eq!(cursor.selected_segment(), Some(&segment(0)));
        assert_eq!(cursor.set_selected(2), Ok(2));
    }

    #[test]
    fn test_circuit_always_has_both_neighbours() {
        let mut cursor = cursor(4, 3, true);

        assert!(cursor.has_next());
        assert!(cursor.has_previous());
        assert!(cursor.move_selection(BuildDirection::Next));
        assert_eq!(cursor.selected_index(), Some(0));
        assert!(cursor.move_selection(BuildDirection::Previous));
        assert_eq!(cursor.selected_index(), Some(3));
    }

    #[test]
    fn test_rebuild_without_initial_segment_is_a_no_op() {
        let mut cursor = cursor(2, 1, false);
        let before = cursor.clone();
        let world = crate::core::MemoryWorld::new();

        assert!(!cursor.rebuild(&world, None, 100));
        assert_eq!(cursor, before);
    }
}

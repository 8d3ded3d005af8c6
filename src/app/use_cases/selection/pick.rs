//! Use-Case: Segment-Selektion per Kachel-Klick.

use crate::core::{CoordsXY, TrackElementItem, World};
use crate::finder::get_track_elements;
use crate::AppState;

/// Wählt unter den Track-Elementen einer Kachel das Start-Segment.
///
/// `pick_first`: erstes Element in Kachel-Reihenfolge, sonst das höchste
/// (bei gleicher Höhe das erste).
fn choose_element(elements: &[TrackElementItem], pick_first: bool) -> Option<&TrackElementItem> {
    if pick_first {
        return elements.first();
    }
    elements
        .iter()
        .rev()
        .max_by_key(|item| item.element.base_z)
}

/// Sammelt alle Track-Elemente der Kachel unter `coords` und baut die Segment-Folge
/// um das gewählte Element neu auf.
///
/// Ohne Track-Element bleibt die bisherige Folge bestehen. Gibt `true` zurück,
/// wenn die Folge ersetzt wurde.
pub fn pick_tile<W: World + ?Sized>(
    state: &mut AppState,
    world: &W,
    coords: CoordsXY,
    pick_first: bool,
) -> bool {
    let elements = get_track_elements(world, coords);
    log::info!(
        "{} Track-Element(e) auf der Kachel bei ({}, {})",
        elements.len(),
        coords.x,
        coords.y
    );

    let initial = choose_element(&elements, pick_first).map(|item| item.segment);
    state.track_elements_on_selected_tile = elements;

    let Some(initial) = initial else {
        return false;
    };

    let limit = state.options.sequence_limit();
    if !state.cursor.rebuild(world, Some(initial), limit) {
        return false;
    }
    state.build.adopt_segment(&initial);

    log::info!(
        "Segment-Folge mit {} Stück(en) selektiert, Start {} (Rundkurs: {})",
        state.cursor.len(),
        initial,
        state.cursor.is_complete_circuit()
    );
    true
}

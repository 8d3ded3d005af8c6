//! Use-Case: abgeleitete Werte nach einer Änderung neu berechnen.

use crate::app::SelectionDerived;
use crate::core::World;
use crate::AppState;

/// Berechnet abgeleitete Selektionswerte und die Bauposition neu.
///
/// Reihenfolge: Selektion → Iterator → Nachbarn → Positionen, danach
/// Anschlusslage am Folgen-Ende in der gewählten Baurichtung.
pub fn refresh_derived<W: World + ?Sized>(state: &mut AppState, world: &W) {
    state.derived = SelectionDerived::compute(world, &state.cursor);

    let direction = state
        .build
        .direction
        .unwrap_or(state.options.default_build_direction);
    let location = state.cursor.build_location_for(world, direction);
    state.build.set_initial_build_location(world, location);
}

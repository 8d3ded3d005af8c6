use crate::core::{BuildDirection, CoordsXY, TrackType};
use crate::shared::AssistantOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kachel angeklickt (Weltkoordinaten, noch nicht durch 32 geteilt)
    TilePicked { coords: CoordsXY },
    /// Selektion einen Schritt weiter bewegen
    IterateRequested { direction: BuildDirection },
    /// Baurichtung gewechselt
    BuildDirectionChanged { direction: BuildDirection },
    /// Zu bauenden Track-Typ gewählt
    TrackTypeChanged { track_type: TrackType },
    /// Selektion verwerfen
    SelectionCleared,
    /// Welt hat sich geändert, abgeleitete Werte neu berechnen
    RefreshRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: AssistantOptions },
}

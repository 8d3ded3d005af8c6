use crate::core::{BuildDirection, CoordsXY, TrackType};
use crate::shared::AssistantOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Track-Elemente einer Kachel sammeln und Segment-Folge neu aufbauen
    PickTile {
        coords: CoordsXY,
        pick_first_track_element: bool,
    },
    /// Selektion innerhalb der Folge verschieben
    MoveSelection { direction: BuildDirection },
    /// Baurichtung setzen
    SetBuildDirection { direction: BuildDirection },
    /// Track-Typ für den nächsten Bau setzen
    SetTrackType { track_type: TrackType },
    /// Folge, Selektion und Kachel-Elemente verwerfen
    ClearSelection,
    /// Abgeleitete Werte und Bauposition neu berechnen
    RefreshDerived,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: AssistantOptions },
}

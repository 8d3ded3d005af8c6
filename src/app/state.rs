//! Application State: zentrale Datenhaltung der Bearbeitungs-Sitzung.

mod build;
mod cursor;
mod derived;

pub use build::{BuildRequest, BuildState};
pub use cursor::{SegmentCursor, SelectionOutOfBounds};
pub use derived::SelectionDerived;

use super::CommandLog;
use crate::core::{Segment, TrackElementItem};
use crate::shared::AssistantOptions;

/// Hauptzustand der Sitzung
///
/// Die Welt gehört nicht dazu; sie wird jedem Controller-Aufruf geliehen.
pub struct AppState {
    /// Segment-Folge und Selektion
    pub cursor: SegmentCursor,
    /// Aus der Selektion abgeleitete Werte
    pub derived: SelectionDerived,
    /// Bau-Parameter
    pub build: BuildState,
    /// Alle Track-Elemente der zuletzt angeklickten Kachel
    pub track_elements_on_selected_tile: Vec<TrackElementItem>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AssistantOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AssistantOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: AssistantOptions) -> Self {
        Self {
            cursor: SegmentCursor::new(),
            derived: SelectionDerived::default(),
            build: BuildState::new(options.default_build_direction),
            track_elements_on_selected_tile: Vec::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuell selektiertes Segment.
    pub fn selected_segment(&self) -> Option<&Segment> {
        self.cursor.selected_segment()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

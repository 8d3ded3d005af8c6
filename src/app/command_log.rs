//! Verlauf der Sitzung: ausgeführte Commands mit der Selektion davor und danach.

use super::AppCommand;
use crate::core::Segment;
use std::collections::VecDeque;

/// Ein ausgeführter Command samt selektiertem Segment vor und nach der Ausführung.
#[derive(Debug, Clone)]
pub struct CommandLogEntry {
    pub command: AppCommand,
    pub selected_before: Option<Segment>,
    pub selected_after: Option<Segment>,
}

impl CommandLogEntry {
    /// `true` wenn der Command ein anderes Segment selektiert hat.
    pub fn changed_selection(&self) -> bool {
        self.selected_after.is_some() && self.selected_before != self.selected_after
    }
}

/// Begrenzter Verlauf; bei voller Kapazität fällt der älteste Eintrag heraus.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität des Verlaufs.
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Verlauf mit eigener Kapazität (mindestens ein Eintrag).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Hängt einen Eintrag an.
    pub fn record(&mut self, entry: CommandLogEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandLogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&CommandLogEntry> {
        self.entries.back()
    }

    /// Nacheinander selektierte Segmente, beginnend mit der ersten Selektion.
    ///
    /// Commands ohne Wechsel der Selektion (z.B. ein Schritt am offenen Ende)
    /// tauchen nicht auf.
    pub fn selection_trail(&self) -> Vec<Segment> {
        self.entries
            .iter()
            .filter(|entry| entry.changed_selection())
            .filter_map(|entry| entry.selected_after)
            .collect()
    }
}

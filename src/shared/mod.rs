//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app` und der Binary geteilt werden.

pub mod options;

pub use options::AssistantOptions;
pub use options::MAX_SEQUENCE_LENGTH;

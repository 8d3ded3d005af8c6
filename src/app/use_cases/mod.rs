//! Use-Cases der Application-Layer-Orchestrierung.

pub mod build;
pub mod selection;

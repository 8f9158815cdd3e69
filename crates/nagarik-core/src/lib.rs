//! Core library for weak-supervision field extraction from OCR-transcribed
//! Nepali citizenship documents.
//!
//! This crate provides:
//! - An immutable rule catalog: per-label pattern lists, gazetteers, an
//!   OCR-noise correction table and the label-priority table
//! - A pure extraction engine: normalization, candidate generation,
//!   per-label validation, overlap resolution and cleanup
//! - An annotated debug rendering of entities over the source text
//!
//! The engine is synchronous and holds no mutable state; one
//! [`WeakLabeler`] may serve any number of concurrent callers.

pub mod error;
pub mod labeler;
pub mod models;

pub use error::{CatalogError, NagarikError, Result};
pub use labeler::rules::{label_priority, RuleCatalog};
pub use labeler::{annotate, Labeler, WeakLabeler};
pub use models::config::LabelerConfig;
pub use models::entity::{Entity, Label, LanguageMode};

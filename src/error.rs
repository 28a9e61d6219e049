//! Engine-level error conditions.
//!
//! Partial data never raises at this layer; the only failures are the two
//! catalog-level dead ends below. Upstream collaborator failures must be
//! resolved into absent data before reaching the engine.

use thiserror::Error;

use crate::models::TemplateScore;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("template catalog is empty")]
    EmptyCatalog,

    #[error(
        "no template scored at or above {threshold} for industry {industry:?} \
         ({} near misses attached)",
        near_misses.len()
    )]
    NoCompatibleTemplate {
        industry: Option<String>,
        threshold: u32,
        /// Top-scoring rejected candidates, for diagnostics.
        near_misses: Vec<TemplateScore>,
    },
}

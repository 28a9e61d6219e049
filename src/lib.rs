pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod orchestration;
pub mod quality;
pub mod questions;
pub mod scoring;
pub mod sections;

// Re-export commonly used types for convenience.
pub use catalog::{starter_catalog, TemplateCatalog};
pub use config::EngineConfig;
pub use error::EngineError;
pub use models::{BusinessRecord, Decision, EngineInput, QualityInsight, TemplateScore};
pub use orchestration::{decide, DecisionPipeline};

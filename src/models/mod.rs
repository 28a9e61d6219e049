//! Shared data model for the decision engine.

pub mod business;
pub mod decision;
pub mod insight;
pub mod question;
pub mod sources;
pub mod template;

pub use business::{
    BrandColor, BusinessRecord, ColorSlot, OpenPeriod, PhotoCategory, PhotoRef,
    RadiusDerivation, ReviewExcerpt, ServiceRadius, TextField, WeeklyHours,
};
pub use decision::Decision;
pub use insight::{CategoryScore, Fact, QualityCategory, QualityInsight};
pub use question::{Question, QuestionKind, QuestionOption};
pub use sources::{
    DistanceUnit, EngineInput, FieldKey, GeoPoint, NamedPlace, OperatorAnswers, PlaceKind,
    PlaceSearchRecord, ProfileRecord, RawHoursPeriod, RawPhoto, RawRadius, RawReview,
    SearchResultsRecord, SearchSnippet, ServiceArea, SourceContribution, SourceKind,
};
pub use template::{
    ContentRequirements, IndustryRules, KeywordRules, ScoreBreakdown, SectionDefinition,
    SectionRequirements, SectionVariant, TemplateDefinition, TemplateScore, TextRequirement,
};

//! Typed clients, one per remote service.

pub mod analysis;
pub mod langid;
pub mod morphology;
pub mod normalization;
pub mod preprocessing;

pub use analysis::SimpleAnalysisClient;
pub use langid::LanguageIdClient;
pub use morphology::MorphologyClient;
pub use normalization::NormalizationClient;
pub use preprocessing::PreprocessingClient;

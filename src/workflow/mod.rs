pub mod document_ctx;
pub mod extraction_flow;
pub mod quality;

pub use document_ctx::DocumentCtx;
pub use extraction_flow::{ExtractionFlow, ExtractionOutcome};
pub use quality::{question_issues, QualityReport};

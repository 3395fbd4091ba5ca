pub mod letter;
pub mod loaders;
pub mod profile;
pub mod question;

pub use letter::Letter;
pub use loaders::{collect_pdf_files, load_metadata_sidecar, load_profile};
pub use profile::{CompiledProfile, LayoutProfile, NamedPattern};
pub use question::{Alternative, ExamMetadata, ExtractedFields, QuestionRecord};

pub mod audit_writer;
pub mod field_extractor;
pub mod id_generator;
pub mod page_cleaner;
pub mod pdf_reader;
pub mod question_splitter;
pub mod record_writer;
pub mod text_dump;

pub use audit_writer::AuditWriter;
pub use field_extractor::FieldExtractor;
pub use id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use page_cleaner::PageCleaner;
pub use pdf_reader::PdfReader;
pub use question_splitter::{QuestionSplitter, Segmentation};
pub use record_writer::RecordWriter;
pub use text_dump::RawTextWriter;

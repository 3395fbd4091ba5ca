pub mod toml_loader;

pub use toml_loader::{collect_pdf_files, load_metadata_sidecar, load_profile, metadata_sidecar_path};

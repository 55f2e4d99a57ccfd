pub mod artifact;
pub mod config;
pub mod error;
pub mod field;
pub mod record;
pub mod source;
pub mod stats;

pub use artifact::{ArtifactKind, ExportArtifact};
pub use config::{Config, HeaderSpec};
pub use error::{PayrunError, Result};
pub use field::Field;
pub use record::DisqualifiedRecord;
pub use source::SourceKey;
pub use stats::PreviewStats;

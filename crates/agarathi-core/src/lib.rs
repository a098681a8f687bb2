pub mod extract;
pub mod normalize;
pub mod payload;
pub mod preprocess;
pub mod providers;
pub mod source;

pub use normalize::Normalizer;
pub use payload::RawPayload;
pub use providers::build_source;
pub use source::{LookupError, SourceMetadata, WordSource};

pub mod entry;
pub mod types;

pub use entry::{Definition, Illustration, Meaning, Phonetic, WordEntry};
pub use types::*;

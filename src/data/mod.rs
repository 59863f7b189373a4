mod builder;
mod loader;

pub use builder::{BuildError, build_quiz};
pub use loader::{LoadError, RawRecords, load_records};

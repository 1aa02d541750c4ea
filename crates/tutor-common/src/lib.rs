pub mod errors;

pub use errors::{ConfigError, StoreError, TutorError};

pub type Result<T> = std::result::Result<T, TutorError>;

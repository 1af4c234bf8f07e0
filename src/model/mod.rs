//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, EngineError, InputError};
pub use key_action::KeyAction;
pub use record::{
    DisplayName, InvalidDisplayName, InvalidRecord, InvalidSlug, Lifespan, RawRecord, Record,
    Slug,
};

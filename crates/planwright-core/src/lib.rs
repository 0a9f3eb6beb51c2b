//! Configuration loading, secret resolution, form model, and prompt assembly.

pub mod config;
pub mod error;
pub mod form;
pub mod generate;
pub mod prompt;
pub mod vault;

pub use config::Config;
pub use error::CoreError;
pub use form::{ClassPeriod, LessonForm};
pub use generate::{create_provider, generate_plan};
pub use vault::Secret;

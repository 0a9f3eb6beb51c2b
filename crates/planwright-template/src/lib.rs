//! PDF template loading and text normalization.

pub mod error;
pub mod extract;
pub mod normalize;

pub use error::TemplateError;
pub use extract::TemplateExtractor;
pub use normalize::normalize_template;

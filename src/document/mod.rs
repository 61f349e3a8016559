//! Document handling: models, validation, and the conversion pipeline.

pub(crate) mod images;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::load_document;
pub use models::*;

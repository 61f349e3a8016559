//! Document parsing utilities.
//!
//! This module contains the specialized steps of the conversion
//! pipeline: text extraction, paragraph classification, list structure
//! reconstruction, and table conversion.

pub(crate) mod classify;
pub(crate) mod list;
pub(crate) mod table;
pub(crate) mod text;

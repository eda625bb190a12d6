//! Translation keys to help text.
//!
//! Help content arrives as a translation key. A [`Translator`] turns it into
//! the raw string that the segmenter splits; a missing key degrades to the key
//! itself rather than an error.

pub mod catalog;

pub use catalog::{Catalog, CatalogError, Translator, Untranslated};

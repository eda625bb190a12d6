pub mod content;
pub mod help;
pub mod i18n;
pub mod parsing;

// Re-export key types for easier usage
pub use content::{ContentResolver, LinkParsing, Segment, segment, segment_with, to_markdown};
pub use help::{ContextHelp, ContextHelpStore, HelpError, TooltipSync};
pub use i18n::{Catalog, CatalogError, Translator, Untranslated};

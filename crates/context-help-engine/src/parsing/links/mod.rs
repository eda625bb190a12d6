//! # Link Parsing
//!
//! Cursor-based splitting of plain text into text runs and markdown inline
//! links of the form `[text](href)`.
//!
//! ## Modules
//!
//! - **`types`**: `LinkNode` enum (Text, Link) holding spans
//! - **`kinds`**: `MarkdownLink` delimiter constants
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`span`**: `Span` byte ranges into the input
//! - **`parser`**: `parse_links()` entry point with the `try_parse_link` helper
//!
//! ## Supported Syntax
//!
//! Only `[text](href)`. There are no escapes, titles, nested or
//! reference-style links. The label ends at the first `]` and the href at the
//! first `)`. A `[` that does not begin a complete link is plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod span;
pub mod types;

pub use parser::parse_links;
pub use span::Span;
pub use types::LinkNode;

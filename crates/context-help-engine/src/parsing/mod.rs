pub mod links;

pub use links::{LinkNode, Span, parse_links};

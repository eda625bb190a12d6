//! # Help Content
//!
//! Segmentation of help text into plain runs and `[text](href)` links, and
//! resolution of content keys through a [`Translator`](crate::i18n::Translator).
//!
//! A presentation layer renders [`Segment::Text`] as literal text and
//! [`Segment::Link`] as an anchor. Escaping, href validation and
//! accessibility are left to that layer.

pub mod resolver;
pub mod segment;

pub use resolver::ContentResolver;
pub use segment::{LinkParsing, Segment, segment, segment_with, to_markdown};

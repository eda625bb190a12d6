use crate::i18n::Translator;

use super::segment::{LinkParsing, Segment, segment_with};

/// Turns a help content key into segments ready for rendering.
#[derive(Debug, Clone)]
pub struct ContentResolver<T> {
    translator: T,
    parsing: LinkParsing,
}

impl<T: Translator> ContentResolver<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator,
            parsing: LinkParsing::default(),
        }
    }

    pub fn with_link_parsing(mut self, parsing: LinkParsing) -> Self {
        self.parsing = parsing;
        self
    }

    pub fn link_parsing(&self) -> LinkParsing {
        self.parsing
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    pub fn resolve(&self, key: &str) -> Vec<Segment> {
        let text = self.translator.translate(key);
        segment_with(&text, self.parsing)
    }
}

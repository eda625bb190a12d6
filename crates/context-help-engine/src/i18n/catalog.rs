use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {catalog_path}: {source}")]
    Read {
        catalog_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog at {catalog_path}: {source}")]
    ParseFile {
        catalog_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog entry `{key}` must be a string, found {found}")]
    InvalidEntry { key: String, found: &'static str },
}

/// Resolves translation keys to display strings.
pub trait Translator {
    /// Returns the text for `key`, or the key itself when there is none.
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        (**self).translate(key)
    }
}

/// Passes keys through unchanged, for content that is already literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// A flat key → text table.
///
/// Catalog files are TOML. Nested tables flatten to dotted keys:
///
/// ```toml
/// [context-help]
/// submission = "Read the [submission guide](/help/submit)."
/// ```
///
/// defines `context-help.submission`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let table: Table = toml::from_str(content)?;
        Self::from_table(table)
    }

    pub fn load_from_path<P: AsRef<Path>>(catalog_path: P) -> Result<Self, CatalogError> {
        let catalog_path = catalog_path.as_ref();
        let content =
            std::fs::read_to_string(catalog_path).map_err(|source| CatalogError::Read {
                catalog_path: catalog_path.to_path_buf(),
                source,
            })?;

        let table: Table =
            toml::from_str(&content).map_err(|source| CatalogError::ParseFile {
                catalog_path: catalog_path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_table(table)?;
        log::info!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            catalog_path.display()
        );
        Ok(catalog)
    }

    fn from_table(table: Table) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.flatten_into("", table)?;
        Ok(catalog)
    }

    fn flatten_into(&mut self, prefix: &str, table: Table) -> Result<(), CatalogError> {
        for (name, value) in table {
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}.{name}")
            };
            match value {
                Value::String(text) => {
                    self.entries.insert(key, text);
                }
                Value::Table(nested) => self.flatten_into(&key, nested)?,
                other => {
                    return Err(CatalogError::InvalidEntry {
                        key,
                        found: other.type_str(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.get(key) {
            Some(text) => Cow::Borrowed(text),
            None => {
                log::debug!("No catalog entry for `{key}`, using the key as text");
                Cow::Borrowed(key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let catalog = Catalog::from_toml_str(
            r#"
title = "Help"

[context-help.submission]
license = "Read the [license](/licenses/cc-by)."
"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("title"), Some("Help"));
        assert_eq!(
            catalog.get("context-help.submission.license"),
            Some("Read the [license](/licenses/cc-by).")
        );
    }

    #[test]
    fn quoted_keys_with_dots_are_kept() {
        let catalog = Catalog::from_toml_str(r#""context-help.edit" = "Edit the item""#).unwrap();
        assert_eq!(catalog.get("context-help.edit"), Some("Edit the item"));
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let catalog = Catalog::new();
        assert_eq!(catalog.translate("context-help.unknown"), "context-help.unknown");
    }

    #[test]
    fn translate_through_reference() {
        let mut catalog = Catalog::new();
        catalog.insert("k", "v");
        let by_ref: &dyn Translator = &catalog;
        assert_eq!((&by_ref).translate("k"), "v");
        assert_eq!(Untranslated.translate("k"), "k");
    }

    #[test]
    fn non_string_entry_is_rejected() {
        let err = Catalog::from_toml_str("[help]\ncount = 3\n").unwrap_err();
        match err {
            CatalogError::InvalidEntry { key, found } => {
                assert_eq!(key, "help.count");
                assert_eq!(found, "integer");
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("title = ").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.toml");
        std::fs::write(&path, "greeting = \"Hi [there](#top)\"\n").unwrap();

        let catalog = Catalog::load_from_path(&path).unwrap();
        assert_eq!(catalog.get("greeting"), Some("Hi [there](#top)"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Catalog::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_malformed_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "= nope").unwrap();

        let err = Catalog::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CatalogError::ParseFile { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}

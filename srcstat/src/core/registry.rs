// src/core/registry.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Category reported for every extension listed in the language document.
pub const CATEGORY_CODE: &str = "code";
/// Category whose files are line counted as blank vs non-blank only.
pub const CATEGORY_MARKUP: &str = "markup";
/// Sentinel category for extensions listed in neither document.
pub const CATEGORY_UNKNOWN: &str = "unknown";

const LANGUAGES_DOCUMENT: &str = include_str!("../../config/languages.yaml");
const CATEGORIES_DOCUMENT: &str = include_str!("../../config/categories.yaml");

/// Line counting configuration for one language.
///
/// An empty `comment` token means the language defines no single-line
/// comment; the classifier then reports every non-blank line as code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageConfig {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub double_quote: Option<char>,
    #[serde(default)]
    pub single_quote: Option<char>,
}

/// Immutable extension lookup tables, loaded once at startup and shared by
/// reference with the scanner and aggregator.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    languages: HashMap<String, LanguageConfig>,
    categories: HashMap<String, String>,
}

impl ExtensionRegistry {
    /// Builds a registry from the two YAML documents: languages keyed by
    /// extension, and categories keyed by category name with a list of
    /// extensions each (inverted here into an extension lookup).
    ///
    /// # Errors
    ///
    /// Fails when either document is not valid YAML of the expected shape.
    pub fn from_documents(languages_doc: &str, categories_doc: &str) -> Result<Self> {
        let languages: HashMap<String, LanguageConfig> = serde_yaml_ng::from_str(languages_doc)
            .context("language document is not valid YAML")?;

        let by_category: HashMap<String, Vec<String>> = serde_yaml_ng::from_str(categories_doc)
            .context("category document is not valid YAML")?;

        let mut categories = HashMap::new();
        for (category, exts) in &by_category {
            for ext in exts {
                if let Some(previous) =
                    categories.insert(ext.clone(), category.clone())
                {
                    debug!(%ext, %previous, %category, "extension listed twice, last wins");
                }
            }
        }

        debug!(
            languages = languages.len(),
            categories = by_category.len(),
            "loaded extension registry"
        );

        Ok(Self {
            languages,
            categories,
        })
    }

    /// Builds the registry from the documents embedded in the binary. The
    /// CLI treats a failure here as fatal before any analysis starts.
    ///
    /// # Errors
    ///
    /// Fails when an embedded document cannot be parsed.
    pub fn builtin() -> Result<Self> {
        Self::from_documents(LANGUAGES_DOCUMENT, CATEGORIES_DOCUMENT)
    }

    #[inline]
    #[must_use]
    pub fn is_code(&self, ext: &str) -> bool {
        self.languages.contains_key(ext)
    }

    #[inline]
    #[must_use]
    pub fn language(&self, ext: &str) -> Option<&LanguageConfig> {
        self.languages.get(ext)
    }

    /// Resolves the category of an extension. Language extensions always win
    /// over category document entries; anything unlisted resolves to the
    /// `"unknown"` sentinel rather than an error.
    #[must_use]
    pub fn category(&self, ext: &str) -> &str {
        if self.is_code(ext) {
            return CATEGORY_CODE;
        }
        self.categories
            .get(ext)
            .map_or(CATEGORY_UNKNOWN, String::as_str)
    }
}

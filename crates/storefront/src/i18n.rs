//! Label lookup for the supported languages.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Label with id {0} not found")]
    UnknownLabel(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(I18nError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::En => "en",
            Language::Es => "es",
        })
    }
}

const EN: &[(&str, &str)] = &[
    ("welcome", "Welcome"),
    ("new_product", "New Product"),
    ("edit_product", "Edit Product"),
];

const ES: &[(&str, &str)] = &[
    ("welcome", "Bienvenidos"),
    ("new_product", "Nuevo Producto"),
    ("edit_product", "Editar Producto"),
];

/// Resolves label ids for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// # Errors
    ///
    /// `UnknownLabel` when `id` is not defined for the language.
    pub fn label(&self, id: &str) -> Result<&'static str, I18nError> {
        let table = match self.language {
            Language::En => EN,
            Language::Es => ES,
        };
        table
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, text)| *text)
            .ok_or_else(|| I18nError::UnknownLabel(id.to_string()))
    }
}

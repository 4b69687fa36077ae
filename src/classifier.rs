//! Keyword-based sentiment classification.
//!
//! A text is `positive` if it contains any positive fragment, otherwise
//! `negative` if it contains any negative fragment, otherwise `neutral`.
//! Matching is a case-insensitive substring search against word stems, so
//! "быстр" matches "быстрый", "быстро" and "Быстрее".

use crate::error::{Result, ServiceError};
use crate::models::review::Sentiment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_POSITIVE: &[&str] = &[
    "хорош", "отличн", "люблю",
    "супер", "класс", "нравит",
    "прекрасн", "удобн", "быстр",
    "рекоменд",
];

const DEFAULT_NEGATIVE: &[&str] = &[
    "плохо", "ужас", "ненавиж",
    "отстой", "проблем", "глюч",
    "медлен", "неудобн", "разочар",
    "бесит",
];

/// Ordered keyword fragments per label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeywordLists {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE.iter().map(|s| s.to_string()).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KeywordLists {
    /// Load a vocabulary from a JSON file of the form
    /// `{"positive": [...], "negative": [...]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            ServiceError::Config(format!(
                "invalid keyword file {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn normalized(self) -> Self {
        Self {
            positive: normalize_fragments(self.positive, Sentiment::Positive),
            negative: normalize_fragments(self.negative, Sentiment::Negative),
        }
    }
}

fn normalize_fragments(fragments: Vec<String>, label: Sentiment) -> Vec<String> {
    fragments
        .into_iter()
        .filter_map(|fragment| {
            let fragment = fragment.to_lowercase();
            if fragment.is_empty() {
                // An empty fragment is a substring of every text.
                warn!("Ignoring empty {} keyword fragment", label);
                None
            } else {
                Some(fragment)
            }
        })
        .collect()
}

fn contains_any(text: &str, fragments: &[String]) -> bool {
    fragments.iter().any(|fragment| text.contains(fragment.as_str()))
}

/// Sentiment classifier bound to an immutable vocabulary.
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: KeywordLists,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(KeywordLists::default())
    }
}

impl Classifier {
    pub fn new(keywords: KeywordLists) -> Self {
        let keywords = keywords.normalized();
        debug!(
            "Classifier ready with {} positive and {} negative fragments",
            keywords.positive.len(),
            keywords.negative.len()
        );
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordLists {
        &self.keywords
    }

    /// Classify `text`. Positive fragments are checked before negative ones,
    /// so a text carrying both kinds is `positive`.
    pub fn classify(&self, text: &str) -> Sentiment {
        let text = text.to_lowercase();

        if contains_any(&text, &self.keywords.positive) {
            Sentiment::Positive
        } else if contains_any(&text, &self.keywords.negative) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

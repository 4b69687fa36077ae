//! Runtime configuration, read from command-line flags with environment fallbacks.

use crate::classifier::KeywordLists;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "review-collector",
    version,
    about = "Collects feedback and classifies it by sentiment"
)]
pub struct Config {
    /// SQLite database file (":memory:" for a throwaway store)
    #[arg(long, env = "REVIEWS_DB_PATH", default_value = "reviews.db")]
    pub db_path: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "REVIEWS_BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind: String,

    /// JSON file with {"positive": [...], "negative": [...]} keyword fragments
    #[arg(long, env = "REVIEWS_KEYWORDS")]
    pub keywords: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "REVIEWS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Keyword vocabulary from the configured file, or the built-in one.
    pub fn keyword_lists(&self) -> Result<KeywordLists> {
        match &self.keywords {
            Some(path) => {
                info!("Loading keyword fragments from {}", path.display());
                KeywordLists::from_json_file(path)
            }
            None => Ok(KeywordLists::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "review-collector",
            "--db-path",
            "/tmp/test.db",
            "--bind",
            "0.0.0.0:9000",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.db_path, "/tmp/test.db");
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_builtin_keywords_without_file() {
        let config = Config::try_parse_from(["review-collector"]).unwrap();
        let config = Config {
            keywords: None,
            ..config
        };
        assert_eq!(config.keyword_lists().unwrap(), KeywordLists::default());
    }

    #[test]
    fn test_keywords_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"positive": ["good"], "negative": ["bad"]}}"#).unwrap();

        let config = Config::try_parse_from([
            "review-collector",
            "--keywords",
            file.path().to_str().unwrap(),
        ])
        .unwrap();

        let keywords = config.keyword_lists().unwrap();
        assert_eq!(keywords.positive, vec!["good"]);
        assert_eq!(keywords.negative, vec!["bad"]);
    }
}

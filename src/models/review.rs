// src/models/review.rs
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentiment label assigned to a review at creation time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three sentiment labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sentiment '{0}', expected one of: positive, negative, neutral")]
pub struct UnknownSentiment(pub String);

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownSentiment(s.to_string()))
    }
}

impl ToSql for Sentiment {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Sentiment {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: UnknownSentiment| FromSqlError::Other(Box::new(e)))
    }
}

/// A stored, immutable review.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,                   // Assigned by the store, strictly increasing
    pub text: String,              // Submitted text, verbatim
    pub sentiment: Sentiment,      // Label computed once at creation
    pub created_at: DateTime<Utc>, // Creation time (UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_parsing() {
        assert_eq!("positive".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!("negative".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert_eq!("neutral".parse::<Sentiment>(), Ok(Sentiment::Neutral));
        assert!("Positive".parse::<Sentiment>().is_err());
        assert!("".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_unknown_sentiment_message() {
        let err = "angry".parse::<Sentiment>().unwrap_err();
        assert_eq!(err, UnknownSentiment("angry".into()));
        assert_eq!(
            err.to_string(),
            "unknown sentiment 'angry', expected one of: positive, negative, neutral"
        );
    }

    #[test]
    fn test_review_json_shape() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T10:20:30.123Z")
            .unwrap()
            .with_timezone(&Utc);
        let review = Review {
            id: 7,
            text: "Сервис работает.".into(),
            sentiment: Sentiment::Neutral,
            created_at,
        };

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["text"], "Сервис работает.");
        assert_eq!(value["sentiment"], "neutral");
        assert_eq!(value["created_at"], "2024-05-01T10:20:30.123Z");
    }
}

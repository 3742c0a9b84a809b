//! News Sentiment Module
//!
//! Scores a batch of news articles through a pluggable [`SentimentModel`].
//! Key pieces:
//! - Lenient article extraction (missing title/summary are fine)
//! - Compound score to label mapping with configurable thresholds
//! - Neutral placeholder model

pub mod neutral;
pub mod step;

pub use neutral::NeutralSentimentModel;
pub use step::{SentimentResult, SentimentStep, SENTIMENT_MESSAGE};

use crate::config::SentimentConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A news article as seen by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    pub summary: Option<String>,
}

impl Article {
    /// Read an article record, ignoring fields that are absent or not strings.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            title: text("title"),
            summary: text("summary"),
        }
    }

    /// Title and summary joined by a space.
    pub fn text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or_default(),
            self.summary.as_deref().unwrap_or_default()
        )
    }
}

/// All article texts as one document, space separated.
pub fn combined_text(articles: &[Article]) -> String {
    articles
        .iter()
        .map(Article::text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classify a compound score (-1.0 to 1.0).
    pub fn from_compound(compound: f64, thresholds: &SentimentConfig) -> Self {
        if compound >= thresholds.positive_threshold {
            SentimentLabel::Positive
        } else if compound <= thresholds.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Model output: label plus compound score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Sentiment model: article sequence in, label and score out.
#[cfg_attr(test, mockall::automock)]
pub trait SentimentModel {
    fn analyze(&self, articles: &[Article]) -> anyhow::Result<SentimentScore>;
}

//! Neutral sentiment model (placeholder)

use super::{Article, SentimentLabel, SentimentModel, SentimentScore};
use crate::config::SentimentConfig;

/// Scores every batch 0.0 and labels it through the configured thresholds.
#[derive(Debug, Clone, Default)]
pub struct NeutralSentimentModel {
    thresholds: SentimentConfig,
}

impl NeutralSentimentModel {
    pub fn new(thresholds: SentimentConfig) -> Self {
        Self { thresholds }
    }
}

impl SentimentModel for NeutralSentimentModel {
    fn analyze(&self, articles: &[Article]) -> anyhow::Result<SentimentScore> {
        let score = 0.0;
        tracing::debug!(articles = articles.len(), score, "neutral placeholder score");
        Ok(SentimentScore {
            label: SentimentLabel::from_compound(score, &self.thresholds),
            score,
        })
    }
}

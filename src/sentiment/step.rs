//! News sentiment analysis step

use super::{Article, NeutralSentimentModel, SentimentLabel, SentimentModel};
use crate::config::SentimentConfig;
use crate::error::Result;
use crate::pipeline::{parse_object, Step, StepProcessor};
use serde::Serialize;
use serde_json::Value;

pub const SENTIMENT_MESSAGE: &str = "Sentiment analysis placeholder";

const SAMPLE_INPUT: &str = r#"{"articles": [{"title": "Company X announces great earnings", "summary": "A very positive outlook."}, {"title": "Market slightly down", "summary": "Some concerns."}]}"#;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentResult {
    pub message: String,
    pub input_article_count: usize,
    pub sentiment: SentimentLabel,
    pub score: f64,
}

pub struct SentimentStep<M = NeutralSentimentModel> {
    model: M,
}

impl SentimentStep<NeutralSentimentModel> {
    pub fn from_config(config: &SentimentConfig) -> Self {
        Self::new(NeutralSentimentModel::new(config.clone()))
    }

    pub fn placeholder() -> Self {
        Self::new(NeutralSentimentModel::default())
    }
}

impl<M: SentimentModel> SentimentStep<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: SentimentModel> StepProcessor for SentimentStep<M> {
    type Output = SentimentResult;

    fn step(&self) -> Step {
        Step::SentimentAnalysis
    }

    fn sample_input(&self) -> &'static str {
        SAMPLE_INPUT
    }

    fn process(&self, input: &str) -> Result<SentimentResult> {
        let data = parse_object(input)?;
        // Anything other than an array counts as no articles.
        let articles: Vec<Article> = match data.get("articles") {
            Some(Value::Array(items)) => items.iter().map(Article::from_value).collect(),
            Some(other) => {
                tracing::debug!(kind = crate::pipeline::json_kind(other), "articles is not an array");
                Vec::new()
            }
            None => Vec::new(),
        };

        let scored = self.model.analyze(&articles)?;
        Ok(SentimentResult {
            message: SENTIMENT_MESSAGE.to_string(),
            input_article_count: articles.len(),
            sentiment: scored.label,
            score: scored.score,
        })
    }
}

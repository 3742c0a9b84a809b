//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::{ProcessingError, StepError};
    use crate::pipeline::Step;

    fn json_error() -> ProcessingError {
        serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_json_error_keeps_parser_message() {
        let err = json_error();
        assert!(err.to_string().contains("line 1 column 2"));
    }

    #[test]
    fn test_not_an_object() {
        let err = ProcessingError::NotAnObject("array");
        assert_eq!(err.to_string(), "expected a JSON object, found array");
    }

    #[test]
    fn test_missing_time_series() {
        let err = ProcessingError::MissingTimeSeries;
        assert!(err.to_string().contains("no time series"));
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = ProcessingError::InvalidTimestamp("yesterday".to_string());
        assert!(err.to_string().contains("\"yesterday\""));
    }

    #[test]
    fn test_model_error_shows_context_chain() {
        let inner = anyhow::anyhow!("weights missing").context("loading ARIMA model");
        let err = ProcessingError::from(inner);
        let msg = err.to_string();
        assert!(msg.contains("loading ARIMA model"));
        assert!(msg.contains("weights missing"));
    }

    #[test]
    fn test_invalid_config() {
        let err = ProcessingError::InvalidConfig("duplicate horizon".to_string());
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_step_error_payload() {
        let err = StepError::new(Step::PriceForecasting, ProcessingError::NotAnObject("null"));
        let payload = err.payload();
        assert_eq!(payload.step, Step::PriceForecasting);
        assert_eq!(payload.error, "expected a JSON object, found null");
    }

    #[test]
    fn test_step_error_display_names_step() {
        let err = StepError::new(Step::DataCleaning, json_error());
        assert!(err.to_string().starts_with("data_cleaning failed:"));
    }

    #[test]
    fn test_payload_serialization() {
        let err = StepError::new(Step::SentimentAnalysis, ProcessingError::MissingTimeSeries);
        let json = serde_json::to_value(err.payload()).unwrap();
        assert_eq!(json["step"], "sentiment_analysis");
        assert_eq!(json["error"], "no time series found in input");
    }
}

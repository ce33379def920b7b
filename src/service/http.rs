use serde::{Deserialize, Serialize};
use url::Url;

use super::{PredictionService, ServiceError};
use crate::config::{ClassifyRoute, ConfigError, ServiceSettings};
use crate::detection::{ClassificationResult, Origin, Prediction, RandomSample, TextMetrics};
use crate::http_client;

const MAX_PREDICTION_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_ERROR_BODY_CHARS: usize = 512;
const RANDOM_ROUTE: &str = "random-predict";

/// Prediction service reached over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpPredictionService {
    classify_url: String,
    random_url: String,
}

impl HttpPredictionService {
    /// Build a client from persisted settings.
    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ConfigError> {
        let base = settings.parsed_base_url()?;
        Ok(Self::new(&base, settings.classify_route))
    }

    pub fn new(base_url: &Url, route: ClassifyRoute) -> Self {
        Self {
            classify_url: endpoint(base_url, route.path()),
            random_url: endpoint(base_url, RANDOM_ROUTE),
        }
    }

    pub fn classify_url(&self) -> &str {
        &self.classify_url
    }

    pub fn random_url(&self) -> &str {
        &self.random_url
    }
}

impl PredictionService for HttpPredictionService {
    fn classify(&self, text: &str) -> Result<ClassificationResult, ServiceError> {
        let request = http_client::agent()
            .post(&self.classify_url)
            .set("Accept", "application/json");
        let body = read_body(request.send_json(ClassifyRequest { text }))?;
        parse_classification(&body)
    }

    fn random_sample(&self) -> Result<RandomSample, ServiceError> {
        let request = http_client::agent()
            .get(&self.random_url)
            .set("Accept", "application/json");
        let body = read_body(request.call())?;
        parse_random_sample(&body)
    }
}

fn endpoint(base: &Url, route: &str) -> String {
    format!("{}/{route}", base.as_str().trim_end_matches('/'))
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictionWire {
    prediction: Option<String>,
    confidence: Option<f64>,
    #[serde(default)]
    metrics: Option<TextMetrics>,
    #[serde(default)]
    actual_origin: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn read_body(response: Result<ureq::Response, ureq::Error>) -> Result<String, ServiceError> {
    match response {
        Ok(response) => http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
            .map_err(|err| ServiceError::Transport(err.to_string())),
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
                .unwrap_or_else(|err| err.to_string());
            Err(ServiceError::Status {
                code,
                body: clip(body.trim()),
            })
        }
        Err(ureq::Error::Transport(err)) => Err(ServiceError::Transport(err.to_string())),
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    clipped.push_str("...");
    clipped
}

fn parse_wire(body: &str) -> Result<PredictionWire, ServiceError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Malformed("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| ServiceError::Malformed(err.to_string()))
}

fn result_from_wire(wire: &mut PredictionWire) -> Result<ClassificationResult, ServiceError> {
    let Some(label) = wire.prediction.as_deref() else {
        let message = wire
            .error
            .take()
            .unwrap_or_else(|| "Missing prediction field".to_string());
        return Err(ServiceError::Malformed(message));
    };
    let prediction = Prediction::parse(label)?;
    let confidence = wire
        .confidence
        .ok_or_else(|| ServiceError::Malformed("Missing confidence field".to_string()))?;
    let metrics = wire.metrics.take().unwrap_or_default();
    let origin = wire
        .actual_origin
        .as_deref()
        .and_then(|label| match Origin::parse(label) {
            Ok(origin) => Some(origin),
            Err(err) => {
                tracing::debug!("Ignoring actual_origin: {err}");
                None
            }
        });
    Ok(ClassificationResult::new(prediction, confidence, metrics)?.with_actual_origin(origin))
}

/// Parse a `/predict` or `/classify` response body.
pub(crate) fn parse_classification(body: &str) -> Result<ClassificationResult, ServiceError> {
    let mut wire = parse_wire(body)?;
    result_from_wire(&mut wire)
}

/// Parse a `/random-predict` response body; both text and result must be present.
pub(crate) fn parse_random_sample(body: &str) -> Result<RandomSample, ServiceError> {
    let mut wire = parse_wire(body)?;
    let result = result_from_wire(&mut wire)?;
    let text = wire
        .text
        .take()
        .filter(|text| !text.trim().is_empty())
        .ok_or(crate::detection::InvalidResult::MissingSampleText)?;
    Ok(RandomSample { text, result })
}

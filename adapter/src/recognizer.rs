use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use kernel::recognizer::TextRecognizer;
use serde::Deserialize;
use shared::config::VisionConfig;
use shared::error::{AppError, AppResult};

/// OCR client for a Google Vision style text-detection endpoint. The image
/// travels base64-encoded in a JSON envelope. The first annotation carries
/// the full recognized text; the rest are individual fragments.
pub struct HttpTextRecognizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpTextRecognizer {
    pub fn new(cfg: &VisionConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| AppError::RecognizerError(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key.clone(),
        })
    }
}

#[derive(Deserialize)]
struct VisionResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
struct AnnotateImageResponse {
    #[serde(default, rename = "textAnnotations")]
    text_annotations: Vec<TextAnnotation>,
}

#[derive(Deserialize)]
struct TextAnnotation {
    description: String,
}

#[async_trait]
impl TextRecognizer for HttpTextRecognizer {
    async fn recognize(&self, image: &[u8]) -> AppResult<Vec<String>> {
        let content = general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "requests": [{
                "image": { "content": content },
                "features": [{ "type": "TEXT_DETECTION" }]
            }]
        });

        let res = self
            .client
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::RecognizerError(e.to_string()))?;

        if !res.status().is_success() {
            return Err(AppError::RecognizerError(format!(
                "vision endpoint returned {}",
                res.status()
            )));
        }

        let payload: VisionResponse = res
            .json()
            .await
            .map_err(|e| AppError::RecognizerError(e.to_string()))?;

        let lines = payload
            .responses
            .into_iter()
            .next()
            .map(|r| {
                r.text_annotations
                    .into_iter()
                    .map(|annotation| annotation.description.trim().to_string())
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(lines)
    }
}

use async_trait::async_trait;
use shared::error::AppResult;

/// Boundary to the external OCR provider: raw image bytes in, recognized
/// text lines out. An empty result means the image carried no legible text.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> AppResult<Vec<String>>;
}

//! Seam between the controller and whatever produces page content

use crate::error::GenerationError;
use async_trait::async_trait;

/// Produces the content for a path
///
/// Called at most once per reserved quota slot. Implementations must not
/// touch the cache; the controller stores successful output itself.
#[async_trait]
pub trait PageGenerator: Send + Sync {
    async fn generate(&self, path: &str) -> Result<String, GenerationError>;
}

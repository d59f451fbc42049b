use anyhow::Result;
use async_trait::async_trait;

/// Pluggable completion seam. Provider implementations live outside
/// this workspace; everything here is provider-agnostic.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

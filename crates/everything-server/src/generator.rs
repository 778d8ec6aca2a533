//! Page generation backed by the completion client

use async_trait::async_trait;
use completion_client::{CompletionClient, CompletionRequest};
use page_cache::{GenerationError, PageGenerator};

/// Asks a completion model to write the HTML for a path
pub struct CompletionPageGenerator {
    client: CompletionClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl CompletionPageGenerator {
    pub fn new(client: CompletionClient, model: &str, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client,
            model: model.to_string(),
            max_tokens,
            temperature,
        }
    }
}

#[async_trait]
impl PageGenerator for CompletionPageGenerator {
    async fn generate(&self, path: &str) -> Result<String, GenerationError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(path),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let text = self
            .client
            .complete(&request)
            .await
            .map_err(|e| GenerationError::Backend(e.to_string()))?;

        let html = clean_html(&text);
        if html.is_empty() {
            return Err(GenerationError::EmptyOutput);
        }
        Ok(html)
    }
}

pub fn build_prompt(path: &str) -> String {
    format!(
        "The following is the HTML for a website. Note the following:\n\
         - The page is dynamically generated each time the page is loaded.\n\
         - The content is based on the path.\n\
         - The page contains interesting stuff for the user to interact with, eg. links to explore more dynamically generated pages.\n\
         - The page has a title.\n\
         - The page does not need external files, eg. JavaScript, CSS or images.\n\
         \n\
         The path is {}:\n",
        path
    )
}

/// Trim the model output and drop a surrounding code fence
pub fn clean_html(text: &str) -> String {
    let mut html = text.trim();
    if let Some(rest) = html.strip_prefix("```") {
        html = rest;
    }
    if let Some(rest) = html.strip_suffix("```") {
        html = rest;
    }
    html.trim().to_string()
}

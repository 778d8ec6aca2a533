//! Client for OpenAI-compatible text completion endpoints
//!
//! Sends a prompt to `POST {base_url}/completions` and returns the text of
//! the first choice.
//!
//! # Example
//!
//! ```no_run
//! use completion_client::{CompletionClient, CompletionRequest};
//!
//! # async fn example() -> Result<(), completion_client::CompletionError> {
//! let client = CompletionClient::new("sk-...");
//! let text = client
//!     .complete(&CompletionRequest {
//!         model: "gpt-3.5-turbo-instruct".to_string(),
//!         prompt: "Say hello".to_string(),
//!         max_tokens: 16,
//!         temperature: 0.7,
//!     })
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::{mask_key, CompletionClient};
pub use error::{CompletionError, Result};
pub use types::CompletionRequest;

//! In-memory page cache with a daily generation quota
//!
//! Pages are generated on demand for arbitrary paths, cached in memory and
//! served until they go stale. A single global counter limits how many
//! generations may be attempted per 24 hour window.
//!
//! # Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use page_cache::{CacheSettings, GenerationError, Outcome, PageController, PageGenerator};
//! use std::sync::Arc;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl PageGenerator for Echo {
//!     async fn generate(&self, path: &str) -> Result<String, GenerationError> {
//!         Ok(format!("<title>{}</title>", path))
//!     }
//! }
//!
//! # async fn example() {
//! let controller = PageController::new(CacheSettings::from_secs(3600, 100), Arc::new(Echo));
//! match controller.handle_now("/hello-world").await {
//!     Outcome::Generated(html) | Outcome::ServeCached(html) => println!("{}", html),
//!     Outcome::QuotaExceeded => println!("come back tomorrow"),
//!     Outcome::GenerationFailed(e) => eprintln!("{}", e),
//! }
//! # }
//! ```

mod controller;
mod error;
mod generator;
mod quota;
mod store;
mod types;

pub use controller::PageController;
pub use error::GenerationError;
pub use generator::PageGenerator;
pub use quota::{QuotaState, QUOTA_WINDOW_HOURS};
pub use store::PageStore;
pub use types::{CacheSettings, CachedPage, ControllerStats, Outcome, QuotaSnapshot};

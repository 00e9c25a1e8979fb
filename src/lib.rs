//! # cnpj-lookup
//!
//! Client library for looking up Brazilian company registry records by CNPJ
//! (the 14-digit company tax identifier), one at a time or in bounded
//! batches, with JSON/CSV export of the results.
//!
//! ## Design Philosophy
//!
//! cnpj-lookup is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Works out of the box against a local service
//! - **Pure where it can be** - Validation, formatting, and export are
//!   side-effect free; only the lookup client touches the network
//! - **Boundary-strict** - Every failure is mapped to a user-presentable
//!   error at the component boundary, nothing leaks raw
//!
//! ## Quick Start
//!
//! ```no_run
//! use cnpj_lookup::{Config, LookupClient, SearchSession, SessionView, export};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LookupClient::new(Config::from_env())?;
//!     let mut session = SearchSession::new();
//!
//!     session.search_batch(&client, "11222333000181\n13037746000111").await;
//!
//!     if let Some(records) = session.batch_results() {
//!         let artifact = export::to_csv(records);
//!         artifact.save_to(std::path::Path::new("."))?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Lookup service HTTP client
pub mod client;
/// CNPJ normalization, validation, and formatting
pub mod cnpj;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// JSON/CSV export serialization
pub mod export;
/// Search session state container
pub mod session;
/// Core types and wire shapes
pub mod types;

// Re-export commonly used types
pub use client::LookupClient;
pub use cnpj::CNPJ_LENGTH;
pub use config::Config;
pub use error::{Error, Result};
pub use export::ExportArtifact;
pub use session::{SearchSession, SessionView};
pub use types::{CompanyRecord, NOT_SPECIFIED};

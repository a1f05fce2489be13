//! # proof-submitter
//!
//! Client for the vOPRF evaluation API. It reads a binary proof produced by an
//! external proving system, posts it to `/api/v1/evaluate` as
//! `{"proof": [u8, ...]}` and hands back the server's JSON reply untouched.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::PathBuf;
//! use proof_submitter::{ProofSubmitter, ServerEndpoint, SubmitterConfig};
//!
//! # async fn example() -> Result<(), proof_submitter::SubmitError> {
//! let config = SubmitterConfig {
//!     endpoint: ServerEndpoint::new("localhost", 8080),
//!     proof_path: PathBuf::from("./packages/zk/target/proof"),
//! };
//!
//! let response = ProofSubmitter::new(config)?.run().await?;
//! println!("Response: {}", response);
//! # Ok(())
//! # }
//! ```
//!
//! The individual steps are exposed as well: [`load_proof`], [`build_payload`]
//! and [`submit`].

pub mod client;
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod response;
pub mod utils;

pub use client::{submit, ProofSubmitter, SubmitterConfig};
pub use endpoint::ServerEndpoint;
pub use error::SubmitError;
pub use payload::{build_payload, load_proof, ProofBytes, RequestPayload};
pub use response::{ApiResponse, ErrorBody};

//! # FundMe Toolkit Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── registry_sync.rs    # Store merge idempotence and failure paths
//!     ├── funding_flow.rs     # Ledger scenario walks against the service
//!     └── deploy_pipeline.rs  # Deployment identity → registry end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fundme-tests
//!
//! # By category
//! cargo test -p fundme-tests integration::registry_sync
//! cargo test -p fundme-tests integration::funding_flow
//! ```

pub mod integration;

//! # Driven Port (SPI - Outbound)
//!
//! The external dependency a withdrawal rides on: the execution
//! environment's value transfer. Adapters implement this trait; the service
//! never touches the environment directly.

use crate::errors::TransferError;
use async_trait::async_trait;
use shared_types::{Address, Amount};

/// Moves value out of the ledger to a recipient.
///
/// Fees are the environment's concern and are opaque to the ledger model.
/// Implementations must either complete the transfer or fail without
/// side effects, since the service drains the ledger only after a
/// successful return.
#[async_trait]
pub trait ValueTransfer: Send + Sync {
    async fn transfer(&self, to: Address, amount: Amount) -> Result<(), TransferError>;
}

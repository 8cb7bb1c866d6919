//! Configuration for Confirmation Resolution

use serde::{Deserialize, Serialize};
use shared_types::TransactionType;

/// Resolver configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Transaction types that never resolve through the redesigned path.
    pub excluded_transaction_types: Vec<TransactionType>,
}

impl ResolverConfig {
    pub fn is_excluded(&self, tx_type: TransactionType) -> bool {
        self.excluded_transaction_types.contains(&tx_type)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            excluded_transaction_types: vec![TransactionType::Cancel, TransactionType::Retry],
        }
    }
}

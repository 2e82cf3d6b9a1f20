//! Seller allow-list filter applied between the fetch and the aggregations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{Result, SalesError};
use crate::models::{Region, Transaction};

// ---------------------------------------------------------------------------
// DashboardFilters — sidebar state for one render pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFilters {
    /// Sent to the API as `regiao`.
    pub region: Region,
    /// Sent to the API as `ano`; `None` fetches the whole period.
    pub year: Option<i32>,
    /// Seller allow-list applied after the fetch. Empty means every seller.
    pub sellers: Vec<String>,
    /// How many sellers the seller charts rank.
    pub seller_count: usize,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            region: Region::All,
            year: None,
            sellers: Vec::new(),
            seller_count: config::SELLER_COUNT_DEFAULT,
        }
    }
}

impl DashboardFilters {
    /// Check `seller_count` lies within the sidebar bounds.
    pub fn validate(&self) -> Result<()> {
        let range = config::SELLER_COUNT_MIN..=config::SELLER_COUNT_MAX;
        if !range.contains(&self.seller_count) {
            return Err(SalesError::InvalidArgument(format!(
                "seller_count must be between {} and {}, got {}",
                config::SELLER_COUNT_MIN,
                config::SELLER_COUNT_MAX,
                self.seller_count
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Seller filter
// ---------------------------------------------------------------------------

/// Keep the transactions whose seller is in `sellers`.
///
/// An empty `sellers` slice means "no filter" and returns every row in its
/// original order.
pub fn filter_by_sellers<S: AsRef<str>>(
    transactions: &[Transaction],
    sellers: &[S],
) -> Vec<Transaction> {
    if sellers.is_empty() {
        return transactions.to_vec();
    }
    let allowed: HashSet<&str> = sellers.iter().map(|s| s.as_ref()).collect();
    transactions
        .iter()
        .filter(|t| allowed.contains(t.seller.as_str()))
        .cloned()
        .collect()
}

/// Distinct seller names in first-occurrence order.
pub fn distinct_sellers(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = HashSet::new();
    transactions
        .iter()
        .filter(|t| seen.insert(t.seller.as_str()))
        .map(|t| t.seller.clone())
        .collect()
}

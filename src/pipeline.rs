//! Aggregation pipeline: derives the summary tables behind every chart from
//! one (possibly seller-filtered) slice of transactions.
//!
//! All functions are pure. Groups are created in first-occurrence order and
//! sorted with a stable sort, so rows with equal metrics keep input order.
//! An empty input produces empty tables.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::{Datelike, Month};
use serde::{Deserialize, Serialize};

use crate::models::{
    CategoryRevenue, CategorySales, MonthRevenue, MonthSales, SellerSummary, StateRevenue,
    StateSales, Transaction,
};

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

/// Sum of all prices.
pub fn total_revenue(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.price).sum()
}

/// Number of transactions.
pub fn total_sales(transactions: &[Transaction]) -> usize {
    transactions.len()
}

// ---------------------------------------------------------------------------
// By state
// ---------------------------------------------------------------------------

/// Revenue per state with the state's coordinates, highest revenue first.
pub fn revenue_by_state(transactions: &[Transaction]) -> Vec<StateRevenue> {
    let locations = state_locations(transactions);
    let mut rows: Vec<StateRevenue> =
        group(transactions, |t| t.state.as_str(), |acc: &mut f64, t| *acc += t.price)
            .into_iter()
            .map(|(state, revenue)| {
                let (lat, lon) = locations.get(state).copied().unwrap_or_default();
                StateRevenue {
                    state: state.to_string(),
                    lat,
                    lon,
                    revenue,
                }
            })
            .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// Sales count per state with the state's coordinates, most sales first.
pub fn sales_count_by_state(transactions: &[Transaction]) -> Vec<StateSales> {
    let locations = state_locations(transactions);
    let mut rows: Vec<StateSales> =
        group(transactions, |t| t.state.as_str(), |acc: &mut usize, _| *acc += 1)
            .into_iter()
            .map(|(state, sales)| {
                let (lat, lon) = locations.get(state).copied().unwrap_or_default();
                StateSales {
                    state: state.to_string(),
                    lat,
                    lon,
                    sales,
                }
            })
            .collect();
    rows.sort_by(|a, b| b.sales.cmp(&a.sales));
    rows
}

/// One `(lat, lon)` per state, taken from the state's first transaction.
pub fn state_locations(
    transactions: &[Transaction],
) -> HashMap<&str, (Option<f64>, Option<f64>)> {
    let mut locations = HashMap::new();
    for t in transactions {
        locations.entry(t.state.as_str()).or_insert((t.lat, t.lon));
    }
    locations
}

// ---------------------------------------------------------------------------
// By month
// ---------------------------------------------------------------------------

/// Revenue per calendar month, in chronological order.
///
/// Every month between the first and the last purchase is present; months
/// without sales carry zero revenue.
pub fn revenue_by_month(transactions: &[Transaction]) -> Vec<MonthRevenue> {
    bucket_by_month(transactions, |acc: &mut f64, t| *acc += t.price)
        .into_iter()
        .map(|((year, month), revenue)| MonthRevenue {
            year,
            month,
            month_name: month_name(month),
            revenue,
        })
        .collect()
}

/// Sales count per calendar month, in chronological order, gaps filled with zero.
pub fn sales_count_by_month(transactions: &[Transaction]) -> Vec<MonthSales> {
    bucket_by_month(transactions, |acc: &mut usize, _| *acc += 1)
        .into_iter()
        .map(|((year, month), sales)| MonthSales {
            year,
            month,
            month_name: month_name(month),
            sales,
        })
        .collect()
}

fn bucket_by_month<A, F>(transactions: &[Transaction], mut fold: F) -> Vec<((i32, u32), A)>
where
    A: Default,
    F: FnMut(&mut A, &Transaction),
{
    let mut buckets: BTreeMap<(i32, u32), A> = BTreeMap::new();
    for t in transactions {
        let key = (t.purchase_date.year(), t.purchase_date.month());
        fold(buckets.entry(key).or_default(), t);
    }

    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Vec::new(),
    };

    std::iter::successors(Some(first), |&(year, month)| {
        let next = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        (next <= last).then_some(next)
    })
    .map(|key| (key, buckets.remove(&key).unwrap_or_default()))
    .collect()
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// By category
// ---------------------------------------------------------------------------

/// Revenue per product category, highest first.
pub fn revenue_by_category(transactions: &[Transaction]) -> Vec<CategoryRevenue> {
    let mut rows: Vec<CategoryRevenue> =
        group(transactions, |t| t.category.as_str(), |acc: &mut f64, t| *acc += t.price)
            .into_iter()
            .map(|(category, revenue)| CategoryRevenue {
                category: category.to_string(),
                revenue,
            })
            .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// Sales count per product category, most sales first.
pub fn sales_count_by_category(transactions: &[Transaction]) -> Vec<CategorySales> {
    let mut rows: Vec<CategorySales> =
        group(transactions, |t| t.category.as_str(), |acc: &mut usize, _| *acc += 1)
            .into_iter()
            .map(|(category, sales)| CategorySales {
                category: category.to_string(),
                sales,
            })
            .collect();
    rows.sort_by(|a, b| b.sales.cmp(&a.sales));
    rows
}

// ---------------------------------------------------------------------------
// By seller
// ---------------------------------------------------------------------------

/// Revenue and sales count per seller, in first-occurrence order.
///
/// Use [`top_sellers_by_revenue`] or [`top_sellers_by_count`] to rank.
pub fn seller_summary(transactions: &[Transaction]) -> Vec<SellerSummary> {
    group(
        transactions,
        |t| t.seller.as_str(),
        |acc: &mut (f64, usize), t| {
            acc.0 += t.price;
            acc.1 += 1;
        },
    )
    .into_iter()
    .map(|(seller, (revenue, sales))| SellerSummary {
        seller: seller.to_string(),
        revenue,
        sales,
    })
    .collect()
}

/// The `n` sellers with the highest revenue, highest first.
pub fn top_sellers_by_revenue(summary: &[SellerSummary], n: usize) -> Vec<SellerSummary> {
    let mut ranked = summary.to_vec();
    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    ranked.truncate(n);
    ranked
}

/// The `n` sellers with the most sales, most first.
pub fn top_sellers_by_count(summary: &[SellerSummary], n: usize) -> Vec<SellerSummary> {
    let mut ranked = summary.to_vec();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked.truncate(n);
    ranked
}

// ---------------------------------------------------------------------------
// SalesTables — every table of one render pass
// ---------------------------------------------------------------------------

/// All derived tables for one transaction set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTables {
    pub total_revenue: f64,
    pub total_sales: usize,
    pub revenue_by_state: Vec<StateRevenue>,
    pub sales_by_state: Vec<StateSales>,
    pub revenue_by_month: Vec<MonthRevenue>,
    pub sales_by_month: Vec<MonthSales>,
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub sales_by_category: Vec<CategorySales>,
    pub sellers: Vec<SellerSummary>,
}

impl SalesTables {
    /// Run every aggregation over `transactions`.
    pub fn compute(transactions: &[Transaction]) -> Self {
        Self {
            total_revenue: total_revenue(transactions),
            total_sales: total_sales(transactions),
            revenue_by_state: revenue_by_state(transactions),
            sales_by_state: sales_count_by_state(transactions),
            revenue_by_month: revenue_by_month(transactions),
            sales_by_month: sales_count_by_month(transactions),
            revenue_by_category: revenue_by_category(transactions),
            sales_by_category: sales_count_by_category(transactions),
            sellers: seller_summary(transactions),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fold transactions into per-key accumulators, keeping first-occurrence order.
fn group<'a, K, A, F, G>(transactions: &'a [Transaction], key: F, mut fold: G) -> Vec<(K, A)>
where
    K: Eq + Hash + Copy,
    A: Default,
    F: Fn(&'a Transaction) -> K,
    G: FnMut(&mut A, &'a Transaction),
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, A)> = Vec::new();
    for t in transactions {
        let k = key(t);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, A::default()));
            groups.len() - 1
        });
        fold(&mut groups[slot].1, t);
    }
    groups
}

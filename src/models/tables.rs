use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Per-state tables (joined with the state's coordinates)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRevenue {
    pub state: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSales {
    pub state: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub sales: usize,
}

// ---------------------------------------------------------------------------
// Per-month tables (chronological)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRevenue {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// English month name, e.g. `"January"`.
    pub month_name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSales {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub sales: usize,
}

// ---------------------------------------------------------------------------
// Per-category tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub sales: usize,
}

// ---------------------------------------------------------------------------
// SellerSummary — revenue and sales count per seller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller: String,
    pub revenue: f64,
    pub sales: usize,
}

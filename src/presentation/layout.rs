//! Tab/column/metric layout of the dashboard page.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::Result;
use crate::filter::{distinct_sellers, filter_by_sellers, DashboardFilters};
use crate::format::{format_count, format_magnitude};
use crate::models::Transaction;
use crate::pipeline::{top_sellers_by_count, top_sellers_by_revenue, SalesTables};
use crate::presentation::charts::{self, Chart};

pub const DASHBOARD_TITLE: &str = "DASHBOARD DE VENDAS";

/// A labelled, pre-formatted summary value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// One column of a tab: a metric on top, charts below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub metric: Metric,
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub title: String,
    pub columns: Vec<Column>,
}

/// Everything the browser needs to draw one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub filters: DashboardFilters,
    /// Sellers present in the fetched data, offered by the seller filter.
    pub available_sellers: Vec<String>,
    pub tabs: Vec<Tab>,
}

impl Dashboard {
    /// Build the dashboard from the fetched (unfiltered) transactions.
    ///
    /// Applies the seller filter from `filters`, aggregates, and lays out
    /// the revenue, sales and sellers tabs. With no rows left every metric
    /// renders as zero and every chart is empty.
    pub fn build(transactions: &[Transaction], filters: DashboardFilters) -> Result<Self> {
        filters.validate()?;

        let available_sellers = distinct_sellers(transactions);
        let filtered = filter_by_sellers(transactions, &filters.sellers);
        let tables = SalesTables::compute(&filtered);

        let tabs = vec![
            revenue_tab(&tables),
            sales_tab(&tables),
            sellers_tab(&tables, filters.seller_count),
        ];

        Ok(Self {
            title: DASHBOARD_TITLE.to_string(),
            filters,
            available_sellers,
            tabs,
        })
    }

    pub fn tab(&self, title: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.title == title)
    }
}

fn revenue_metric(tables: &SalesTables) -> Metric {
    Metric {
        label: "Receita".to_string(),
        value: format_magnitude(tables.total_revenue, config::REVENUE_PREFIX),
    }
}

fn sales_metric(tables: &SalesTables) -> Metric {
    Metric {
        label: "Quantidade de vendas".to_string(),
        value: format_count(tables.total_sales),
    }
}

fn revenue_tab(tables: &SalesTables) -> Tab {
    Tab {
        title: "Receita".to_string(),
        columns: vec![
            Column {
                metric: revenue_metric(tables),
                charts: vec![
                    charts::revenue_map(&tables.revenue_by_state),
                    charts::top_states_revenue_bar(&tables.revenue_by_state),
                ],
            },
            Column {
                metric: sales_metric(tables),
                charts: vec![
                    charts::monthly_revenue_line(&tables.revenue_by_month),
                    charts::category_revenue_bar(&tables.revenue_by_category),
                ],
            },
        ],
    }
}

fn sales_tab(tables: &SalesTables) -> Tab {
    Tab {
        title: "Quantidade de vendas".to_string(),
        columns: vec![
            Column {
                metric: revenue_metric(tables),
                charts: vec![
                    charts::sales_map(&tables.sales_by_state),
                    charts::top_states_sales_bar(&tables.sales_by_state),
                ],
            },
            Column {
                metric: sales_metric(tables),
                charts: vec![
                    charts::monthly_sales_line(&tables.sales_by_month),
                    charts::category_sales_bar(&tables.sales_by_category),
                ],
            },
        ],
    }
}

fn sellers_tab(tables: &SalesTables, seller_count: usize) -> Tab {
    let by_revenue = top_sellers_by_revenue(&tables.sellers, seller_count);
    let by_count = top_sellers_by_count(&tables.sellers, seller_count);
    Tab {
        title: "Vendedores".to_string(),
        columns: vec![
            Column {
                metric: revenue_metric(tables),
                charts: vec![charts::top_sellers_revenue_bar(&by_revenue, seller_count)],
            },
            Column {
                metric: sales_metric(tables),
                charts: vec![charts::top_sellers_sales_bar(&by_count, seller_count)],
            },
        ],
    }
}

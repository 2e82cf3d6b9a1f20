//! Chart specifications built from the aggregated tables.
//!
//! These are plain data: the browser front end maps each [`Chart`] onto a
//! Plotly figure. Nothing here knows about HTML or JavaScript.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{
    CategoryRevenue, CategorySales, MonthRevenue, MonthSales, SellerSummary, StateRevenue,
    StateSales,
};

// ---------------------------------------------------------------------------
// Chart types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    ScatterGeo(GeoChart),
    Line(LineChart),
    Bar(BarChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::ScatterGeo(c) => &c.title,
            Chart::Line(c) => &c.title,
            Chart::Bar(c) => &c.title,
        }
    }
}

/// Map of markers sized by a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoChart {
    pub title: String,
    pub scope: String,
    pub size_label: String,
    pub points: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Metric over months, one line per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// `[0, max]` over every series.
    pub y_range: [f64; 2],
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Bars with their values printed on them.
///
/// For horizontal bars `labels` run along the y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub orientation: Orientation,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Revenue charts
// ---------------------------------------------------------------------------

pub fn revenue_map(rows: &[StateRevenue]) -> Chart {
    geo_chart(
        "Receita por estado",
        "Preço",
        rows.iter().map(|r| (r.state.as_str(), r.lat, r.lon, r.revenue)),
    )
}

pub fn monthly_revenue_line(rows: &[MonthRevenue]) -> Chart {
    line_chart(
        "Receita mensal",
        "Receita",
        rows.iter().map(|r| (r.year, r.month_name.as_str(), r.revenue)),
    )
}

/// Top [`config::TOP_ENTITIES`] states by revenue.
pub fn top_states_revenue_bar(rows: &[StateRevenue]) -> Chart {
    let top = &rows[..rows.len().min(config::TOP_ENTITIES)];
    vertical_bar(
        "Top estados (receita)",
        "Local da compra",
        "Receita",
        top.iter().map(|r| (r.state.as_str(), r.revenue)),
    )
}

pub fn category_revenue_bar(rows: &[CategoryRevenue]) -> Chart {
    vertical_bar(
        "Receita por categoria",
        "Categoria do Produto",
        "Receita",
        rows.iter().map(|r| (r.category.as_str(), r.revenue)),
    )
}

// ---------------------------------------------------------------------------
// Sales count charts
// ---------------------------------------------------------------------------

pub fn sales_map(rows: &[StateSales]) -> Chart {
    geo_chart(
        "Quantidade de vendas por estado",
        "Quantidade de vendas",
        rows.iter().map(|r| (r.state.as_str(), r.lat, r.lon, r.sales as f64)),
    )
}

pub fn monthly_sales_line(rows: &[MonthSales]) -> Chart {
    line_chart(
        "Vendas mensais",
        "Vendas",
        rows.iter().map(|r| (r.year, r.month_name.as_str(), r.sales as f64)),
    )
}

/// Top [`config::TOP_ENTITIES`] states by sales count.
pub fn top_states_sales_bar(rows: &[StateSales]) -> Chart {
    let top = &rows[..rows.len().min(config::TOP_ENTITIES)];
    vertical_bar(
        "Top estados (vendas)",
        "Local da compra",
        "Vendas",
        top.iter().map(|r| (r.state.as_str(), r.sales as f64)),
    )
}

pub fn category_sales_bar(rows: &[CategorySales]) -> Chart {
    vertical_bar(
        "Quantidade de vendas por categoria",
        "Categoria do Produto",
        "Vendas",
        rows.iter().map(|r| (r.category.as_str(), r.sales as f64)),
    )
}

// ---------------------------------------------------------------------------
// Seller charts
// ---------------------------------------------------------------------------

/// Horizontal bars of the `n` sellers already ranked by revenue.
pub fn top_sellers_revenue_bar(ranked: &[SellerSummary], n: usize) -> Chart {
    horizontal_bar(
        format!("Top {} vendedores (receita)", n),
        "Receita",
        ranked.iter().map(|s| (s.seller.as_str(), s.revenue)),
    )
}

/// Horizontal bars of the `n` sellers already ranked by sales count.
pub fn top_sellers_sales_bar(ranked: &[SellerSummary], n: usize) -> Chart {
    horizontal_bar(
        format!("Top {} vendedores (quantidade de vendas)", n),
        "Vendas",
        ranked.iter().map(|s| (s.seller.as_str(), s.sales as f64)),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// States without coordinates cannot be placed on the map and are skipped.
fn geo_chart<'a>(
    title: &str,
    size_label: &str,
    rows: impl Iterator<Item = (&'a str, Option<f64>, Option<f64>, f64)>,
) -> Chart {
    let points = rows
        .filter_map(|(name, lat, lon, value)| {
            Some(GeoPoint {
                name: name.to_string(),
                lat: lat?,
                lon: lon?,
                value,
            })
        })
        .collect();
    Chart::ScatterGeo(GeoChart {
        title: title.to_string(),
        scope: config::GEO_SCOPE.to_string(),
        size_label: size_label.to_string(),
        points,
    })
}

/// Rows must be chronological; one series per year in order of first appearance.
fn line_chart<'a>(
    title: &str,
    y_axis_title: &str,
    rows: impl Iterator<Item = (i32, &'a str, f64)>,
) -> Chart {
    let mut series: Vec<(i32, LineSeries)> = Vec::new();
    let mut max = 0.0_f64;
    for (year, month, value) in rows {
        max = max.max(value);
        let idx = match series.iter().position(|(y, _)| *y == year) {
            Some(idx) => idx,
            None => {
                series.push((
                    year,
                    LineSeries {
                        name: year.to_string(),
                        x: Vec::new(),
                        y: Vec::new(),
                    },
                ));
                series.len() - 1
            }
        };
        series[idx].1.x.push(month.to_string());
        series[idx].1.y.push(value);
    }
    Chart::Line(LineChart {
        title: title.to_string(),
        x_axis_title: "Mes".to_string(),
        y_axis_title: y_axis_title.to_string(),
        y_range: [0.0, max],
        series: series.into_iter().map(|(_, s)| s).collect(),
    })
}

fn vertical_bar<'a>(
    title: &str,
    x_axis_title: &str,
    y_axis_title: &str,
    rows: impl Iterator<Item = (&'a str, f64)>,
) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) =
        rows.map(|(l, v)| (l.to_string(), v)).unzip();
    Chart::Bar(BarChart {
        title: title.to_string(),
        x_axis_title: x_axis_title.to_string(),
        y_axis_title: y_axis_title.to_string(),
        orientation: Orientation::Vertical,
        labels,
        values,
    })
}

fn horizontal_bar<'a>(
    title: String,
    x_axis_title: &str,
    rows: impl Iterator<Item = (&'a str, f64)>,
) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) =
        rows.map(|(l, v)| (l.to_string(), v)).unzip();
    Chart::Bar(BarChart {
        title,
        x_axis_title: x_axis_title.to_string(),
        y_axis_title: "Vendedores".to_string(),
        orientation: Orientation::Horizontal,
        labels,
        values,
    })
}

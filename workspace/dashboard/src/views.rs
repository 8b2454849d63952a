//! Pure view models for the table, statistics, bar chart, pie chart and pager.
//!
//! Each function maps committed data to display-ready values and never touches
//! coordinator state.

use chrono::Month;
use common::{BarSeries, PieSeries, StatisticsSummary, TransactionPage};
use plotly::Bar;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::coordinator::DashboardState;

/// One rendered line of the transactions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub sold: &'static str,
    pub date_of_sale: String,
}

pub fn table_rows(page: &TransactionPage) -> Vec<TableRow> {
    page.transactions
        .iter()
        .map(|record| TableRow {
            id: record.id.to_string(),
            title: record.title.clone(),
            price: format_amount(record.price),
            description: record.description.clone(),
            category: record.category.clone(),
            sold: if record.sold { "Yes" } else { "No" },
            date_of_sale: record.date_of_sale.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

/// Amount with exactly two decimals.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// English month name, or `Month N` when the number is out of range.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name().to_string())
        .unwrap_or_else(|| format!("Month {}", month))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsCards {
    pub period_label: String,
    pub total_sale_amount: String,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

pub fn statistics_cards(summary: &StatisticsSummary, year: i32, month: u32) -> StatisticsCards {
    StatisticsCards {
        period_label: format!("{} {}", month_name(month), year),
        total_sale_amount: format_amount(summary.total_sale_amount),
        total_sold_items: summary.total_sold_items,
        total_not_sold_items: summary.total_not_sold_items,
    }
}

/// Plotly data array for the price-range bar chart.
pub fn bar_chart_data(series: &BarSeries) -> Value {
    let ranges: Vec<String> = series.buckets.iter().map(|b| b.range.clone()).collect();
    let counts: Vec<u64> = series.buckets.iter().map(|b| b.count).collect();
    let trace = Bar::new(ranges, counts).name("Items");
    // Plotly trace types serialize infallibly to plain JSON objects
    let trace = serde_json::to_value(&trace).unwrap_or(Value::Null);
    Value::Array(vec![trace])
}

pub fn bar_chart_layout(year: i32, month: u32) -> Value {
    json!({
        "title": { "text": format!("Price ranges - {} {}", month_name(month), year) },
        "margin": {"t": 40, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"title": {"text": "Price range"}, "showgrid": false},
        "yaxis": {"title": {"text": "Items"}, "showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"}
    })
}

/// Plotly data array for the category pie chart.
pub fn pie_chart_data(series: &PieSeries) -> Value {
    let labels: Vec<&str> = series.slices.iter().map(|s| s.category.as_str()).collect();
    let values: Vec<u64> = series.slices.iter().map(|s| s.count).collect();
    json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": 0.4,
        "textinfo": "label+percent"
    }])
}

pub fn pie_chart_layout(year: i32, month: u32) -> Value {
    json!({
        "title": { "text": format!("Categories - {} {}", month_name(month), year) },
        "margin": {"t": 40, "r": 10, "l": 10, "b": 10},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.1}
    })
}

/// Pager label and button states for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub total_pages: Option<u32>,
    pub label: String,
    pub can_prev: bool,
    pub can_next: bool,
}

pub fn page_info(state: &DashboardState) -> PageInfo {
    let page = state.filter.page();
    let total_pages = state.total_pages();
    let label = match total_pages {
        Some(total) => format!("Page {} of {}", page, total.max(1)),
        None => format!("Page {}", page),
    };
    PageInfo {
        page,
        total_pages,
        label,
        can_prev: state.can_go_prev() && !state.is_loading(),
        can_next: state.can_go_next() && !state.is_loading(),
    }
}

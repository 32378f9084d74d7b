// ============================================================================
// CHARTS - Chart.js configuration derived from dashboard state
// ============================================================================
// Pure functions: the component memoizes them and hands the result to the
// chart FFI as a JS object.
// ============================================================================

use serde::Serialize;

use crate::models::{Allocation, HistoryPoint};

/// Slice colours, reused cyclically past the eighth holding.
pub const PALETTE: [&str; 8] = [
    "#4F46E5", "#10B981", "#F59E0B", "#EF4444", "#3B82F6", "#8B5CF6", "#EC4899", "#14B8A6",
];

pub const PORTFOLIO_VALUE_LABEL: &str = "Portfolio value";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
        }
    }
}

/// Full `new Chart(canvas, config)` argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn is_empty(&self) -> bool {
        self.data.labels.is_empty()
    }
}

pub fn pie_chart(allocations: &[Allocation]) -> ChartConfig {
    let labels = allocations.iter().map(|a| a.ticker.clone()).collect();
    let data = allocations.iter().map(|a| a.allocation).collect();
    let background_color = (0..allocations.len())
        .map(|i| palette_color(i).to_string())
        .collect();

    ChartConfig {
        kind: ChartKind::Pie,
        data: ChartData {
            labels,
            datasets: vec![ChartDataset {
                label: None,
                data,
                background_color,
                border_color: None,
                fill: None,
                tension: None,
            }],
        },
        options: ChartOptions::default(),
    }
}

pub fn line_chart(history: &[HistoryPoint]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: history.iter().map(|h| h.date.clone()).collect(),
            datasets: vec![ChartDataset {
                label: Some(PORTFOLIO_VALUE_LABEL.to_string()),
                data: history.iter().map(|h| h.value).collect(),
                background_color: Vec::new(),
                border_color: Some(palette_color(0).to_string()),
                fill: Some(false),
                tension: Some(0.25),
            }],
        },
        options: ChartOptions::default(),
    }
}

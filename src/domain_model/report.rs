use serde::{Deserialize, Serialize};

/// Aggregate counters the reports endpoint returns for the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
    pub average_rating: Option<f64>,
}

//! Dashboard state: a read-only summary snapshot.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::DashboardSummary;

/// Dashboard state provided via context as `RwSignal<DashboardState>`.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub epoch: u64,
}

impl DashboardState {
    pub fn adopt(&mut self, summary: DashboardSummary) {
        self.summary = Some(summary);
        self.loading = false;
        self.error = None;
        self.epoch += 1;
    }

    /// Tallest bar in the weekly chart, floored at 1 so scaling never
    /// divides by zero.
    pub fn productivity_peak(&self) -> u32 {
        self.summary
            .as_ref()
            .and_then(|s| s.weekly_productivity.iter().map(|d| d.task_count).max())
            .unwrap_or(0)
            .max(1)
    }
}

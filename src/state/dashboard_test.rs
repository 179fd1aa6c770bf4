use super::*;
use crate::net::types::DayProductivity;

#[test]
fn adopt_clears_loading_and_errors() {
    let mut state = DashboardState { loading: true, error: Some("x".to_owned()), ..DashboardState::default() };
    state.adopt(DashboardSummary::default());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.epoch, 1);
}

#[test]
fn productivity_peak_floors_at_one() {
    let state = DashboardState::default();
    assert_eq!(state.productivity_peak(), 1);

    let summary = DashboardSummary {
        weekly_productivity: vec![
            DayProductivity { day: "Mon".to_owned(), task_count: 2 },
            DayProductivity { day: "Tue".to_owned(), task_count: 5 },
        ],
        ..DashboardSummary::default()
    };
    let state = DashboardState { summary: Some(summary), ..DashboardState::default() };
    assert_eq!(state.productivity_peak(), 5);
}

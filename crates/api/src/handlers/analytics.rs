//! Analytics view: static sample data.
//!
//! There is no real analytics pipeline (an explicit non-goal); the view
//! renders a fixed dataset.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DayPoint {
    pub name: &'static str,
    pub reach: u32,
    pub efficiency: u32,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsOverview {
    pub stats: Vec<StatCard>,
    pub series: Vec<DayPoint>,
}

/// GET /api/v1/analytics
pub async fn overview() -> impl IntoResponse {
    let stats = vec![
        StatCard { label: "Total Reach", value: "1.2M", change: "+12.5%" },
        StatCard { label: "Engagement", value: "48.2k", change: "+5.2%" },
        StatCard { label: "Content Efficiency", value: "94%", change: "+2.4%" },
        StatCard { label: "Avg. Writing Time", value: "12m", change: "-18.0%" },
    ];

    let series = vec![
        DayPoint { name: "Mon", reach: 4000, efficiency: 2400 },
        DayPoint { name: "Tue", reach: 3000, efficiency: 1398 },
        DayPoint { name: "Wed", reach: 2000, efficiency: 9800 },
        DayPoint { name: "Thu", reach: 2780, efficiency: 3908 },
        DayPoint { name: "Fri", reach: 1890, efficiency: 4800 },
        DayPoint { name: "Sat", reach: 2390, efficiency: 3800 },
        DayPoint { name: "Sun", reach: 3490, efficiency: 4300 },
    ];

    Json(DataResponse {
        data: AnalyticsOverview { stats, series },
    })
}

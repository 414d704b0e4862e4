use std::sync::Arc;

use anyhow::Result;
use dashboard_core::{DashboardConfig, ForecastClient, ScheduleStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub forecast: ForecastClient,
    // The store re-reads its file on each request; nothing is cached here
    pub schedule: Arc<ScheduleStore>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        Ok(AppState {
            forecast: ForecastClient::new(config.forecast.clone())?,
            schedule: Arc::new(ScheduleStore::new(config.schedule_path())),
        })
    }
}

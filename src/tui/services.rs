use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::directory::{EmployeeSource, RandomUserClient};

use super::events::AppEvent;

/// Centralized handle to backend services.
///
/// Created once at startup and owned by the app state.
pub struct Services {
    pub source: Arc<dyn EmployeeSource>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    /// Build services from config, talking to the configured directory API.
    pub fn init(config: &AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let client = RandomUserClient::from_config(&config.directory);
        log::info!("Directory source: {}", client.endpoint());
        Self::with_source(Arc::new(client), event_tx)
    }

    /// Build services around an arbitrary record source.
    pub fn with_source(
        source: Arc<dyn EmployeeSource>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { source, event_tx }
    }

    /// Run the one-shot directory fetch in the background.
    ///
    /// The outcome is posted back as `EmployeesLoaded` or `EmployeesFailed`.
    /// There is no timeout, cancellation, or retry.
    pub fn spawn_fetch(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match source.fetch_employees().await {
                Ok(records) => AppEvent::EmployeesLoaded(records),
                Err(e) => AppEvent::EmployeesFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }
}

//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::repository::PayrollRepository;
use crate::service::PayrollService;

/// Shared application state.
///
/// Holds the loaded configuration and the payroll service built on top of
/// the configured repository.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    service: PayrollService,
}

impl AppState {
    /// Creates the state from a configuration and the repository to read from.
    pub fn new(config: ConfigLoader, repository: Arc<dyn PayrollRepository>) -> Self {
        let service = PayrollService::new(repository, *config.payroll());
        Self {
            config: Arc::new(config),
            service,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll service.
    pub fn service(&self) -> &PayrollService {
        &self.service
    }
}

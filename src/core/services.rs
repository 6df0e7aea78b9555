//! Unified service container for manual-tools
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::repository::ManualRepository;
use crate::core::search::{ExceptionFinder, SearchEngine};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Manual repository with the per-manual TOC cache
    pub repository: Arc<ManualRepository>,

    /// Text search over sections
    pub search: Arc<SearchEngine>,

    /// Exception/caution passage extraction
    pub exceptions: Arc<ExceptionFinder>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// The configuration is validated first, so limits outside the
    /// allowed bounds never reach the search layer.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let repository = Arc::new(ManualRepository::from_config(&config));

        let search = Arc::new(SearchEngine::new(
            Arc::clone(&repository),
            config.search.clone(),
        ));

        let exceptions = Arc::new(ExceptionFinder::new(
            Arc::clone(&repository),
            config.exceptions.clone(),
        )?);

        Ok(Self {
            repository,
            search,
            exceptions,
            config: Arc::new(config),
        })
    }
}

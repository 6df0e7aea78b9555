// Test helper functions

use manual_tools::core::config::Config;
use manual_tools::core::services::Services;
use std::path::Path;
use std::sync::Arc;

/// Default configuration pointed at `root`
#[allow(dead_code)]
pub fn test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.manuals.root = root.to_path_buf();
    config
}

/// Services over `root` with default configuration
#[allow(dead_code)]
pub fn create_test_services(root: &Path) -> Arc<Services> {
    Arc::new(Services::new(test_config(root)).expect("Failed to create services"))
}

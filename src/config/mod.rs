mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{AnalysisConfig, Config, ScanConfig};
pub use validation::validate_config;

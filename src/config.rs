//! Command-line configuration
//!
//! Loaded from an optional HCL file:
//!
//! ```hcl
//! log_level = "debug"
//!
//! scheduler {
//!   count          = 10
//!   max_iterations = 1051200
//! }
//! ```

use crate::error::{CronError, Result};
use crate::schedule::SchedulerConfig;
use serde::Deserialize;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cronexpr.hcl";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn from_hcl(src: &str) -> Result<Self> {
        let cfg: CliConfig =
            hcl::from_str(src).map_err(|e| CronError::Config(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let cfg: CliConfig = hcl::from_str(&src)
            .map_err(|e| CronError::Config(format!("parse error in {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scheduler.count == 0 {
            return Err(CronError::Config(
                "scheduler.count must be at least 1".to_string(),
            ));
        }
        if self.scheduler.max_iterations == 0 {
            return Err(CronError::Config(
                "scheduler.max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

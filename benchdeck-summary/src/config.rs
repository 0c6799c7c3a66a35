//! Configuration loading from benchdeck.toml
//!
//! Summary configuration can be specified in a `benchdeck.toml` file in the
//! project root. The configuration is discovered by walking up from the
//! current directory.

use crate::order::{
    AlphabeticalOrderProvider, DeclaredOrderProvider, DefaultOrderProvider,
    FastestFirstOrderProvider, OrderProvider,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file name looked up by [`SummaryConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "benchdeck.toml";

/// Built-in ordering policies selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderPolicy {
    /// Job, then parameters, then declaration order
    #[default]
    Default,
    /// Declaration order
    Declared,
    /// Ascending mean time
    FastestFirst,
    /// Target name, then job
    Alphabetical,
}

impl OrderPolicy {
    /// Provider implementing this policy
    pub fn provider(self) -> Arc<dyn OrderProvider> {
        match self {
            OrderPolicy::Default => Arc::new(DefaultOrderProvider),
            OrderPolicy::Declared => Arc::new(DeclaredOrderProvider),
            OrderPolicy::FastestFirst => Arc::new(FastestFirstOrderProvider),
            OrderPolicy::Alphabetical => Arc::new(AlphabeticalOrderProvider),
        }
    }
}

/// BenchDeck configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryConfig {
    /// Summary configuration
    #[serde(default)]
    pub summary: SummarySection,
    /// Provider attached in code; wins over `summary.order`
    #[serde(skip)]
    custom_order: Option<Arc<dyn OrderProvider>>,
}

/// `[summary]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySection {
    /// Ordering policy; the default provider is used when unset
    #[serde(default)]
    pub order: Option<OrderPolicy>,
    /// Directory exporters write summary artifacts to
    #[serde(default = "default_results_directory")]
    pub results_directory: String,
}

impl Default for SummarySection {
    fn default() -> Self {
        Self {
            order: None,
            results_directory: default_results_directory(),
        }
    }
}

fn default_results_directory() -> String {
    "target/benchdeck/results".to_string()
}

impl SummaryConfig {
    /// Attach a custom order provider
    pub fn with_order_provider(mut self, provider: Arc<dyn OrderProvider>) -> Self {
        self.custom_order = Some(provider);
        self
    }

    /// Select a built-in ordering policy
    pub fn with_order_policy(mut self, policy: OrderPolicy) -> Self {
        self.summary.order = Some(policy);
        self
    }

    /// Configured order provider, if any.
    ///
    /// A provider attached in code takes precedence over the named policy.
    pub fn order_provider(&self) -> Option<Arc<dyn OrderProvider>> {
        self.custom_order
            .clone()
            .or_else(|| self.summary.order.map(OrderPolicy::provider))
    }

    /// Configured results directory
    pub fn results_directory(&self) -> PathBuf {
        PathBuf::from(&self.summary.results_directory)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring invalid config"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# BenchDeck Configuration

[summary]
# Display order: "default", "declared", "fastest-first" or "alphabetical"
# (uncomment to enable; the default policy is used otherwise)
# order = "fastest-first"
# Directory exporters write summary artifacts to
results_directory = "target/benchdeck/results"
"#
        .to_string()
    }
}

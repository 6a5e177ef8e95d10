//! Application configuration. Seed catalog path, log filter, listing defaults.

use serde::Deserialize;

/// Log filter used when neither RUST_LOG nor SCHOOL_ACTIVITIES_LOG_FILTER is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON seed catalog. Built-in catalog when unset. Read from SCHOOL_ACTIVITIES_SEED_PATH.
    #[serde(default)]
    pub seed_path: Option<String>,

    /// tracing EnvFilter directive. Read from SCHOOL_ACTIVITIES_LOG_FILTER.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Only list activities meeting on this weekday. Read from SCHOOL_ACTIVITIES_DEFAULT_DAY.
    #[serde(default)]
    pub default_day: Option<String>,
}

impl AppConfig {
    /// Environment (SCHOOL_ACTIVITIES_*), `.env`, and an optional file named by
    /// SCHOOL_ACTIVITIES_CONFIG. Environment wins over the file.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("SCHOOL_ACTIVITIES_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("SCHOOL_ACTIVITIES"));
        c.build()?.try_deserialize()
    }

    pub fn log_filter_or_default(&self) -> String {
        self.log_filter
            .clone()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Seed path, ignoring blank values.
    pub fn seed_path(&self) -> Option<&str> {
        self.seed_path.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn default_day(&self) -> Option<&str> {
        self.default_day.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

use log::Level;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Runtime settings for the browser bundle.
///
/// A CSR bundle has no process environment, so overrides are read at compile
/// time from `TRIP_API_BASE_URL` and `TRIP_LOG_LEVEL`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("TRIP_API_BASE_URL"), option_env!("TRIP_LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

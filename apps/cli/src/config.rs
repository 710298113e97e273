use paymaster_core::constants::DISPLAY_DECIMAL_PRECISION;

/// Largest scale a `Decimal` can carry.
const MAX_DISPLAY_PRECISION: u32 = 28;

/// Process settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `text` or `json`
    pub log_format: String,
    /// Size of the rayon pool used for company runs. `None` keeps rayon's default.
    pub workers: Option<usize>,
    /// Decimal places amounts are rounded to when printed.
    pub display_precision: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_format: "text".to_string(),
            workers: None,
            display_precision: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let log_format =
            std::env::var("PAYMASTER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let workers = std::env::var("PAYMASTER_WORKERS")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0);
        let display_precision = std::env::var("PAYMASTER_DISPLAY_PRECISION")
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DISPLAY_DECIMAL_PRECISION)
            .min(MAX_DISPLAY_PRECISION);
        Self {
            log_format,
            workers,
            display_precision,
        }
    }
}

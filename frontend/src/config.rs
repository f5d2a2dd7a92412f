//! Process-wide reader configuration.
//!
//! The configuration is read once at startup from build-time environment
//! values and installed with [`init`]; components only ever read it.

use std::sync::OnceLock;

use common::endpoints::ApiUrls;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URLs of the corpus API.
    pub api: ApiUrls,
    /// Items per page in every listing.
    pub page_size: u32,
}

impl AppConfig {
    /// Reads `LEXICON_API_BASE_URL` and `LEXICON_PAGE_SIZE` as set when the
    /// bundle was built.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("LEXICON_API_BASE_URL"),
            option_env!("LEXICON_PAGE_SIZE"),
        )
    }

    fn from_values(api_base_url: Option<&str>, page_size: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        let page_size = page_size
            .and_then(|size| size.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            api: ApiUrls::new(api_base_url),
            page_size,
        }
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Installs the configuration. Later calls keep the first value.
pub fn init(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

/// The installed configuration, falling back to the build environment.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

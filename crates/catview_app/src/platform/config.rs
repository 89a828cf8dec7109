use catview_core::DEFAULT_API_BASE;
use catview_engine::ClientSettings;
use catview_logging::catview_warn;
use url::Url;

use super::logging::LogDestination;

const ENV_API_BASE: &str = "CATVIEW_API_BASE";
const ENV_LOG: &str = "CATVIEW_LOG";

/// Runtime configuration. Nothing is persisted between sessions.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub log_destination: LogDestination,
    /// Values that were present but rejected; reported once logging is up.
    pub rejected: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, url::ParseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, url::ParseError> {
        let mut rejected = Vec::new();

        let api_base = match lookup(ENV_API_BASE) {
            Some(raw) => match parse_api_base(&raw) {
                Some(url) => url,
                None => {
                    rejected.push(format!("{ENV_API_BASE}={raw}"));
                    Url::parse(DEFAULT_API_BASE)?
                }
            },
            None => Url::parse(DEFAULT_API_BASE)?,
        };

        let log_destination = match lookup(ENV_LOG) {
            Some(raw) => LogDestination::parse(&raw).unwrap_or_else(|| {
                rejected.push(format!("{ENV_LOG}={raw}"));
                LogDestination::default()
            }),
            None => LogDestination::default(),
        };

        Ok(Self {
            client: ClientSettings::with_api_base(api_base),
            log_destination,
            rejected,
        })
    }

    pub fn report_rejected(&self) {
        for entry in &self.rejected {
            catview_warn!("Ignoring invalid setting {}", entry);
        }
    }
}

/// Accepts only hierarchical http(s) URLs so path segments can be appended.
fn parse_api_base(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    let usable = matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base();
    usable.then_some(url)
}

use tracing::warn;

pub const DEFAULT_ELECTIONS_LIMIT: i64 = 2;

/// Runtime settings read from the deployment's secret store. Every key is
/// optional; the database itself is provisioned by the runtime, so no
/// credentials live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum number of upcoming elections returned.
    pub elections_limit: i64,
    /// Exact origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            elections_limit: DEFAULT_ELECTIONS_LIMIT,
            allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let elections_limit = match lookup("ELECTIONS_LIMIT") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    warn!("Ignoring invalid ELECTIONS_LIMIT {:?}, using {}", raw, DEFAULT_ELECTIONS_LIMIT);
                    DEFAULT_ELECTIONS_LIMIT
                }
            },
            None => DEFAULT_ELECTIONS_LIMIT,
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().trim_end_matches('/'))
                    .filter(|origin| !origin.is_empty() && *origin != "*")
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            elections_limit,
            allowed_origins,
        }
    }
}

//! Badge service configuration — loaded from environment variables.

#[derive(Clone, Debug)]
pub struct BadgeConfig {
    /// Upstream request timeout in seconds.
    pub request_timeout_secs: u64,
    /// max-age for the Cache-Control header on badge responses.
    pub cache_max_age_secs: u64,
    /// Scheme for upstream Buildbot URLs. Production instances are https;
    /// overriding to http allows pointing at a local instance.
    pub upstream_scheme: String,
}

impl BadgeConfig {
    pub fn from_env() -> Self {
        let request_timeout_secs = parse_env("BADGE_REQUEST_TIMEOUT_SECS", 10);
        let cache_max_age_secs = parse_env("BADGE_CACHE_MAX_AGE_SECS", 300);
        let upstream_scheme =
            std::env::var("BADGE_UPSTREAM_SCHEME").unwrap_or_else(|_| "https".to_string());

        if upstream_scheme != "https" {
            tracing::warn!(
                "BADGE_UPSTREAM_SCHEME set to {} -- upstream requests are not encrypted",
                upstream_scheme
            );
        }

        Self {
            request_timeout_secs,
            cache_max_age_secs,
            upstream_scheme,
        }
    }
}

/// Parse a numeric env var, warning when a set value is unusable.
fn parse_env(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("{} set to unparseable value {:?} -- using default {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

//! Service-wide settings read from the environment

/// Environment variable naming the backend used when `init` omits one
pub const BACKEND_ENV: &str = "POKECHAMP_LLM_BACKEND";

pub const DEFAULT_BACKEND: &str = "deepseek";

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Backend assumed by an `init` command without a `backend` field
    pub default_backend: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_backend: DEFAULT_BACKEND.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(backend) = lookup(BACKEND_ENV).filter(|b| !b.trim().is_empty()) {
            config.default_backend = backend.trim().to_string();
        }

        config
    }
}

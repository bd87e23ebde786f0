//! Backend credential checks for the `init` command
//!
//! Initialization only verifies that the credential a backend would need is
//! available. The heuristic engine answers every decision whichever backend
//! was named.

use thiserror::Error;

/// Backend families, by the credential they need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// `deepseek`, talking to DeepSeek directly
    DeepSeek,
    /// `gpt-*`
    OpenAi,
    /// `gemini-*`
    Gemini,
    /// Models routed through OpenRouter (`openai/...`, `deepseek-ai/...`, ...)
    OpenRouter,
    /// `llama*` / `ollama*`, served locally
    Local,
    /// Anything else; nothing is checked
    Unrecognized,
}

const OPENROUTER_PREFIXES: [&str; 6] = [
    "deepseek",
    "openai/",
    "anthropic/",
    "meta/",
    "mistral/",
    "cohere/",
];

impl Backend {
    /// Classify a backend name
    ///
    /// The exact name `deepseek` is matched before any prefix, so only longer
    /// deepseek-prefixed names are routed through OpenRouter.
    pub fn classify(name: &str) -> Self {
        if name == "deepseek" {
            Backend::DeepSeek
        } else if name.starts_with("gpt") {
            Backend::OpenAi
        } else if name.starts_with("gemini") {
            Backend::Gemini
        } else if OPENROUTER_PREFIXES.iter().any(|p| name.starts_with(p)) {
            Backend::OpenRouter
        } else if name.starts_with("llama") || name.starts_with("ollama") {
            Backend::Local
        } else {
            Backend::Unrecognized
        }
    }

    /// Environment variable holding this backend's API key, if it needs one
    pub fn key_var(&self) -> Option<&'static str> {
        match self {
            Backend::DeepSeek => Some("DEEPSEEK_API_KEY"),
            Backend::OpenAi => Some("OPENAI_API_KEY"),
            Backend::Gemini => Some("GEMINI_API_KEY"),
            Backend::OpenRouter => Some("OPENROUTER_API_KEY"),
            Backend::Local | Backend::Unrecognized => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InitError {
    #[error("{var} not set. Please set {var} environment variable.")]
    MissingKey { var: &'static str },

    #[error("{backend} requires {var}. Please set {var} environment variable.")]
    MissingRoutedKey { backend: String, var: &'static str },
}

/// Where credentials are looked up
pub trait EnvLookup {
    /// Whether the variable is present, even if empty
    fn is_set(&self, name: &str) -> bool;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }
}

/// What the last `init` asked for
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub backend: String,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("backend", &self.backend)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl BackendConfig {
    /// Check that the backend's credential is available.
    ///
    /// An explicit `api_key` satisfies any requirement; otherwise the backend's
    /// variable must be present in `env`. Returns the success message.
    pub fn validate(&self, env: &impl EnvLookup) -> Result<String, InitError> {
        let backend = Backend::classify(&self.backend);

        if let Some(var) = backend.key_var()
            && self.api_key.is_none()
            && !env.is_set(var)
        {
            return Err(match backend {
                Backend::OpenRouter => InitError::MissingRoutedKey {
                    backend: self.backend.clone(),
                    var,
                },
                _ => InitError::MissingKey { var },
            });
        }

        Ok(format!("AI initialized with {}", self.backend))
    }
}

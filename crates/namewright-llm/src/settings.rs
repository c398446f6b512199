//! Provider selection from configuration

use crate::{LlmError, MockProvider, OllamaProvider, OpenAiProvider};
use namewright_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};

/// Which backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI-compatible chat completions
    #[default]
    OpenAi,
    /// Local Ollama server
    Ollama,
    /// Canned responses, no network
    Mock,
}

impl ProviderKind {
    /// Get the provider name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
            ProviderKind::Mock => "mock",
        }
    }
}

/// Provider settings as stored in the `[provider]` config section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Backend kind
    #[serde(default)]
    pub kind: ProviderKind,

    /// API base URL; the backend default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model name; the backend default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed response for the mock backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_response: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            endpoint: None,
            model: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            mock_response: None,
        }
    }
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

impl ProviderSettings {
    /// Configured model, or the default for the backend kind
    pub fn model(&self) -> &str {
        match (&self.model, self.kind) {
            (Some(model), _) => model,
            (None, ProviderKind::Ollama) => crate::ollama::DEFAULT_MODEL,
            (None, _) => crate::openai::DEFAULT_MODEL,
        }
    }

    /// Whether the backend needs an API key
    pub fn requires_credential(&self) -> bool {
        self.kind == ProviderKind::OpenAi
    }

    /// Build the configured provider
    ///
    /// The credential is passed in explicitly; it is only required for
    /// backends that authenticate.
    pub fn build(&self, api_key: Option<String>) -> Result<ConfiguredProvider, LlmError> {
        match self.kind {
            ProviderKind::OpenAi => {
                let key = api_key.ok_or_else(|| LlmError::MissingCredential(self.kind.as_str().to_string()))?;
                let mut provider = OpenAiProvider::new(key)
                    .with_model(self.model())
                    .with_temperature(self.temperature)
                    .with_max_tokens(self.max_tokens)
                    .with_timeout_secs(self.timeout_secs)
                    .with_max_retries(self.max_retries);
                if let Some(endpoint) = &self.endpoint {
                    provider = provider.with_endpoint(endpoint);
                }
                Ok(ConfiguredProvider::OpenAi(provider))
            }
            ProviderKind::Ollama => {
                let endpoint = self
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| crate::ollama::DEFAULT_ENDPOINT.to_string());
                Ok(ConfiguredProvider::Ollama(
                    OllamaProvider::new(endpoint, self.model())
                        .with_timeout_secs(self.timeout_secs)
                        .with_max_retries(self.max_retries),
                ))
            }
            ProviderKind::Mock => Ok(ConfiguredProvider::Mock(match &self.mock_response {
                Some(response) => MockProvider::new(response.clone()),
                None => MockProvider::default(),
            })),
        }
    }
}

/// Any provider selected at runtime
pub enum ConfiguredProvider {
    /// OpenAI-compatible backend
    OpenAi(OpenAiProvider),
    /// Ollama backend
    Ollama(OllamaProvider),
    /// Mock backend
    Mock(MockProvider),
}

impl ConfiguredProvider {
    /// Backend kind
    pub fn kind(&self) -> ProviderKind {
        match self {
            ConfiguredProvider::OpenAi(_) => ProviderKind::OpenAi,
            ConfiguredProvider::Ollama(_) => ProviderKind::Ollama,
            ConfiguredProvider::Mock(_) => ProviderKind::Mock,
        }
    }
}

impl LlmProviderTrait for ConfiguredProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            ConfiguredProvider::OpenAi(p) => p.generate(prompt),
            ConfiguredProvider::Ollama(p) => p.generate(prompt),
            ConfiguredProvider::Mock(p) => p.generate(prompt),
        }
    }

    fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        match self {
            ConfiguredProvider::OpenAi(p) => p.generate_with_system(system, prompt),
            ConfiguredProvider::Ollama(p) => p.generate_with_system(system, prompt),
            ConfiguredProvider::Mock(p) => p.generate_with_system(system, prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let settings: ProviderSettings = toml::from_str("").unwrap();
        assert_eq!(settings.kind, ProviderKind::OpenAi);
        assert_eq!(settings.model(), "gpt-4o");
        assert_eq!(settings.timeout_secs, 60);
        assert!(settings.requires_credential());
    }

    #[test]
    fn test_parse_ollama_section() {
        let settings: ProviderSettings = toml::from_str(
            r#"
            kind = "ollama"
            model = "llama3"
            endpoint = "http://gpu-box:11434"
            "#,
        )
        .unwrap();
        assert_eq!(settings.kind, ProviderKind::Ollama);
        assert!(!settings.requires_credential());
        let provider = settings.build(None).unwrap();
        assert_eq!(provider.kind(), ProviderKind::Ollama);
    }

    #[test]
    fn test_default_model_follows_kind() {
        let settings: ProviderSettings = toml::from_str(r#"kind = "ollama""#).unwrap();
        assert_eq!(settings.model(), crate::ollama::DEFAULT_MODEL);

        let settings: ProviderSettings = toml::from_str(
            r#"
            kind = "ollama"
            model = "mistral"
            "#,
        )
        .unwrap();
        assert_eq!(settings.model(), "mistral");
    }

    #[test]
    fn test_openai_requires_key() {
        let settings = ProviderSettings::default();
        let err = settings.build(None).err().unwrap();
        assert!(matches!(err, LlmError::MissingCredential(_)));
        assert!(settings.build(Some("sk-x".into())).is_ok());
    }

    #[test]
    fn test_mock_backend() {
        let settings = ProviderSettings {
            kind: ProviderKind::Mock,
            mock_response: Some("renamed.txt".into()),
            ..ProviderSettings::default()
        };
        let provider = settings.build(None).unwrap();
        assert_eq!(provider.generate("anything").unwrap(), "renamed.txt");
    }
}

use std::{collections::HashMap, str::FromStr};

use thiserror::Error;

use crate::bindings::ProviderName;

use super::{Provider, VimeoProvider, YouTubeProvider};

/// Error returned when a provider name does not resolve to a registered
/// `Provider`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Provider `{0}` not found.")]
pub struct UnknownProviderError(pub String);

impl FromStr for ProviderName {
    type Err = UnknownProviderError;

    /// Provider names are matched exactly, case included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownProviderError(s.to_owned()))
    }
}

/// Registry of available providers, one instance per `ProviderName`.
pub struct ProviderRegistry {
    providers: HashMap<ProviderName, Box<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Create a registry with every supported provider.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(VimeoProvider));
        registry.register(Box::new(YouTubeProvider));
        registry
    }

    /// Register a provider, replacing the one previously registered under the
    /// same name.
    pub fn register(&mut self, provider: Box<dyn Provider>) {
        self.providers.insert(provider.name(), provider);
    }

    pub fn get(&self, name: ProviderName) -> Option<&dyn Provider> {
        self.providers.get(&name).map(|p| p.as_ref())
    }

    /// Resolve a provider from its name as found in a container attribute.
    pub fn resolve(&self, name: &str) -> Result<&dyn Provider, UnknownProviderError> {
        let parsed = name.parse::<ProviderName>()?;
        self.get(parsed)
            .ok_or_else(|| UnknownProviderError(name.to_owned()))
    }

    /// List all registered provider names.
    pub fn names(&self) -> Vec<ProviderName> {
        let mut names: Vec<ProviderName> = self.providers.keys().copied().collect();
        names.sort_by_key(|n| *n as u8);
        names
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

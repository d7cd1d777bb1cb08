use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Provider {
    /// OpenAI API
    #[value(name = "openai")]
    OpenAi,
    /// Anthropic Claude API
    Anthropic,
    /// Azure OpenAI Service (South India)
    Azure,
}

/// Static display metadata for a provider
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct ProviderInfo {
    pub(crate) id: Provider,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) website: &'static str,
}

impl Provider {
    pub(crate) const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Anthropic, Provider::Azure];

    pub(crate) fn id(self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Azure => "azure",
        }
    }

    pub(crate) fn info(self) -> ProviderInfo {
        match self {
            Provider::OpenAi => ProviderInfo {
                id: self,
                name: "OpenAI",
                description: "Official OpenAI API pricing",
                website: "https://openai.com/api/pricing/",
            },
            Provider::Anthropic => ProviderInfo {
                id: self,
                name: "Anthropic Claude",
                description: "Claude API models for conversational AI",
                website: "https://www.anthropic.com/pricing",
            },
            Provider::Azure => ProviderInfo {
                id: self,
                name: "Azure OpenAI (India)",
                description: "Microsoft Azure OpenAI Service - South India pricing",
                website: "https://azure.microsoft.com/en-us/pricing/details/cognitive-services/openai-service/",
            },
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

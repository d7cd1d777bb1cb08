//! Compiled-in pricing catalog
//!
//! Prices are USD per million tokens. Order matters: it is the display order
//! and the first entry per provider is that provider's default model.

use super::provider::Provider;
use super::types::ModelPricing;

pub(crate) static CATALOG: &[ModelPricing] = &[
    // OpenAI
    ModelPricing {
        id: "openai-gpt-4o",
        name: "GPT-4o",
        input_price: 2.50,
        output_price: 10.00,
        category: "GPT-4o",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("Most capable GPT-4o model"),
    },
    ModelPricing {
        id: "openai-gpt-4o-2024-11-20",
        name: "GPT-4o (2024-11-20)",
        input_price: 2.50,
        output_price: 10.00,
        category: "GPT-4o",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("GPT-4o with November 2024 training"),
    },
    ModelPricing {
        id: "openai-gpt-4o-2024-08-06",
        name: "GPT-4o (2024-08-06)",
        input_price: 2.50,
        output_price: 10.00,
        category: "GPT-4o",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("GPT-4o with August 2024 training"),
    },
    ModelPricing {
        id: "openai-gpt-4o-2024-05-13",
        name: "GPT-4o (2024-05-13)",
        input_price: 5.00,
        output_price: 15.00,
        category: "GPT-4o",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("Original GPT-4o model"),
    },
    ModelPricing {
        id: "openai-gpt-4o-mini",
        name: "GPT-4o mini",
        input_price: 0.15,
        output_price: 0.60,
        category: "GPT-4o mini",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("Fast and cost-effective model"),
    },
    ModelPricing {
        id: "openai-gpt-4o-mini-2024-07-18",
        name: "GPT-4o mini (2024-07-18)",
        input_price: 0.15,
        output_price: 0.60,
        category: "GPT-4o mini",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("GPT-4o mini with July 2024 training"),
    },
    ModelPricing {
        id: "openai-gpt-4-turbo",
        name: "GPT-4 Turbo",
        input_price: 10.00,
        output_price: 30.00,
        category: "GPT-4 Turbo",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("High-performance GPT-4 model"),
    },
    ModelPricing {
        id: "openai-gpt-4-turbo-2024-04-09",
        name: "GPT-4 Turbo (2024-04-09)",
        input_price: 10.00,
        output_price: 30.00,
        category: "GPT-4 Turbo",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("GPT-4 Turbo with April 2024 training"),
    },
    ModelPricing {
        id: "openai-gpt-4",
        name: "GPT-4",
        input_price: 30.00,
        output_price: 60.00,
        category: "GPT-4",
        provider: Provider::OpenAi,
        context_window: Some(8_000),
        description: Some("Original GPT-4 model"),
    },
    ModelPricing {
        id: "openai-gpt-4-0613",
        name: "GPT-4 (0613)",
        input_price: 30.00,
        output_price: 60.00,
        category: "GPT-4",
        provider: Provider::OpenAi,
        context_window: Some(8_000),
        description: Some("GPT-4 with June 2013 training"),
    },
    ModelPricing {
        id: "openai-gpt-3.5-turbo",
        name: "GPT-3.5 Turbo",
        input_price: 0.50,
        output_price: 1.50,
        category: "GPT-3.5 Turbo",
        provider: Provider::OpenAi,
        context_window: Some(16_000),
        description: Some("Fast and economical model"),
    },
    ModelPricing {
        id: "openai-gpt-3.5-turbo-0125",
        name: "GPT-3.5 Turbo (0125)",
        input_price: 0.50,
        output_price: 1.50,
        category: "GPT-3.5 Turbo",
        provider: Provider::OpenAi,
        context_window: Some(16_000),
        description: Some("Updated GPT-3.5 Turbo"),
    },
    ModelPricing {
        id: "openai-o1-preview",
        name: "o1-preview",
        input_price: 15.00,
        output_price: 60.00,
        category: "o1 (Reasoning)",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("Advanced reasoning model"),
    },
    ModelPricing {
        id: "openai-o1-preview-2024-09-12",
        name: "o1-preview (2024-09-12)",
        input_price: 15.00,
        output_price: 60.00,
        category: "o1 (Reasoning)",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("o1-preview with September 2024 training"),
    },
    ModelPricing {
        id: "openai-o1-mini",
        name: "o1-mini",
        input_price: 3.00,
        output_price: 12.00,
        category: "o1 (Reasoning)",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("Compact reasoning model"),
    },
    ModelPricing {
        id: "openai-o1-mini-2024-09-12",
        name: "o1-mini (2024-09-12)",
        input_price: 3.00,
        output_price: 12.00,
        category: "o1 (Reasoning)",
        provider: Provider::OpenAi,
        context_window: Some(128_000),
        description: Some("o1-mini with September 2024 training"),
    },
    // Anthropic
    ModelPricing {
        id: "claude-opus-4",
        name: "Claude Opus 4",
        input_price: 15.00,
        output_price: 75.00,
        category: "Claude Opus",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Most powerful Claude model for complex tasks"),
    },
    ModelPricing {
        id: "claude-opus-4.1",
        name: "Claude Opus 4.1",
        input_price: 15.00,
        output_price: 75.00,
        category: "Claude Opus",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Latest Opus with improved coding capabilities"),
    },
    ModelPricing {
        id: "claude-sonnet-4",
        name: "Claude Sonnet 4",
        input_price: 3.00,
        output_price: 15.00,
        category: "Claude Sonnet",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Balanced performance and cost"),
    },
    ModelPricing {
        id: "claude-3.5-sonnet",
        name: "Claude 3.5 Sonnet",
        input_price: 3.00,
        output_price: 15.00,
        category: "Claude 3.5",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Previous generation Sonnet model"),
    },
    ModelPricing {
        id: "claude-3.5-haiku",
        name: "Claude 3.5 Haiku",
        input_price: 0.25,
        output_price: 1.25,
        category: "Claude 3.5",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Fast and economical Claude model"),
    },
    ModelPricing {
        id: "claude-3-opus",
        name: "Claude 3 Opus",
        input_price: 15.00,
        output_price: 75.00,
        category: "Claude 3",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Powerful Claude 3 model"),
    },
    ModelPricing {
        id: "claude-3-sonnet",
        name: "Claude 3 Sonnet",
        input_price: 3.00,
        output_price: 15.00,
        category: "Claude 3",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Balanced Claude 3 model"),
    },
    ModelPricing {
        id: "claude-3-haiku",
        name: "Claude 3 Haiku",
        input_price: 0.25,
        output_price: 1.25,
        category: "Claude 3",
        provider: Provider::Anthropic,
        context_window: Some(200_000),
        description: Some("Fast Claude 3 model"),
    },
    // Azure OpenAI, South India region
    ModelPricing {
        id: "azure-gpt-4o",
        name: "GPT-4o (Azure)",
        input_price: 3.00,
        output_price: 10.00,
        category: "GPT-4o",
        provider: Provider::Azure,
        context_window: Some(128_000),
        description: Some("GPT-4o on Azure OpenAI Service"),
    },
    ModelPricing {
        id: "azure-gpt-4o-mini",
        name: "GPT-4o mini (Azure)",
        input_price: 0.15,
        output_price: 0.60,
        category: "GPT-4o mini",
        provider: Provider::Azure,
        context_window: Some(128_000),
        description: Some("Cost-efficient GPT-4o mini on Azure"),
    },
    ModelPricing {
        id: "azure-gpt-4o-mini-0718",
        name: "GPT-4o mini 0718 (Azure)",
        input_price: 0.15,
        output_price: 0.60,
        category: "GPT-4o mini",
        provider: Provider::Azure,
        context_window: Some(128_000),
        description: Some("GPT-4o mini 0718 with caching support (cached input: $0.075/1M)"),
    },
    ModelPricing {
        id: "azure-gpt-4-turbo",
        name: "GPT-4 Turbo (Azure)",
        input_price: 10.00,
        output_price: 30.00,
        category: "GPT-4 Turbo",
        provider: Provider::Azure,
        context_window: Some(128_000),
        description: Some("GPT-4 Turbo on Azure OpenAI Service"),
    },
    ModelPricing {
        id: "azure-gpt-4",
        name: "GPT-4 (Azure)",
        input_price: 30.00,
        output_price: 60.00,
        category: "GPT-4",
        provider: Provider::Azure,
        context_window: Some(8_000),
        description: Some("GPT-4 on Azure OpenAI Service"),
    },
    ModelPricing {
        id: "azure-gpt-4-32k",
        name: "GPT-4 32K (Azure)",
        input_price: 60.00,
        output_price: 120.00,
        category: "GPT-4",
        provider: Provider::Azure,
        context_window: Some(32_000),
        description: Some("GPT-4 with 32K context on Azure"),
    },
    ModelPricing {
        id: "azure-gpt-3.5-turbo",
        name: "GPT-3.5 Turbo (Azure)",
        input_price: 0.50,
        output_price: 1.50,
        category: "GPT-3.5 Turbo",
        provider: Provider::Azure,
        context_window: Some(16_000),
        description: Some("GPT-3.5 Turbo on Azure OpenAI Service"),
    },
    ModelPricing {
        id: "azure-gpt-3.5-turbo-16k",
        name: "GPT-3.5 Turbo 16K (Azure)",
        input_price: 3.00,
        output_price: 4.00,
        category: "GPT-3.5 Turbo",
        provider: Provider::Azure,
        context_window: Some(16_000),
        description: Some("GPT-3.5 Turbo with 16K context on Azure"),
    },
];

/// Look up a catalog entry by exact id
pub(crate) fn find_model(catalog: &[ModelPricing], id: &str) -> Option<ModelPricing> {
    catalog.iter().find(|m| m.id == id).copied()
}

/// First catalog entry for `provider`, in catalog order
pub(crate) fn first_model_for(catalog: &[ModelPricing], provider: Provider) -> Option<&ModelPricing> {
    catalog.iter().find(|m| m.provider == provider)
}

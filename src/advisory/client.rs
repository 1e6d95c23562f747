use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AdvisoryError, AdvisorySummarizer, AdvisorySummary};
use crate::analysis::domain::{HealthProfile, ProductSnapshot};
use crate::config::AdvisoryConfig;

/// Chat-completions adapter for the advisory summarizer. Talks to any
/// OpenAI-compatible endpoint selected by configuration; an unset API key
/// leaves the client unconfigured and every call resolves to the fallback.
#[derive(Debug, Clone)]
pub struct HttpAdvisoryClient {
    api_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl HttpAdvisoryClient {
    pub fn new(config: &AdvisoryConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client: Client::new(),
        }
    }

    async fn call_service(&self, prompt: String) -> Result<String, AdvisoryError> {
        let api_key = self.api_key.as_deref().ok_or(AdvisoryError::Unconfigured)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a food safety and nutrition expert. Provide accurate, \
                              evidence-based analysis."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Status { status, body });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AdvisoryError::EmptyResponse)
    }
}

impl AdvisorySummarizer for HttpAdvisoryClient {
    async fn summarize(
        &self,
        product: &ProductSnapshot,
        profile: Option<&HealthProfile>,
    ) -> Result<AdvisorySummary, AdvisoryError> {
        let prompt = build_prompt(product, profile);
        let content = self.call_service(prompt).await?;

        // The service is asked for JSON but not trusted to return it; prose
        // answers are kept as the summary with reduced confidence.
        match serde_json::from_str::<AdvisorySummary>(&content) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                warn!(%err, "advisory response was not structured JSON; using raw text");
                Ok(AdvisorySummary {
                    summary: content,
                    recommendations: Vec::new(),
                    confidence: 80.0,
                    concerns: Vec::new(),
                })
            }
        }
    }
}

fn build_prompt(product: &ProductSnapshot, profile: Option<&HealthProfile>) -> String {
    let nutrition = product
        .nutrition_facts
        .as_ref()
        .and_then(|facts| serde_json::to_string(facts).ok())
        .unwrap_or_else(|| "{}".to_string());
    let profile = profile
        .and_then(|profile| serde_json::to_string(profile).ok())
        .unwrap_or_else(|| "{}".to_string());

    format!(
        "Analyze this consumable product for health and safety risks:\n\n\
         Product: {name}\n\
         Ingredients: {ingredients}\n\
         Nutrition: {nutrition}\n\
         Category: {category}\n\n\
         User Health Profile: {profile}\n\n\
         Provide a comprehensive analysis including:\n\
         1. Overall safety assessment\n\
         2. Specific health concerns\n\
         3. Personalized recommendations based on health profile\n\
         4. Long-term consumption risks\n\
         5. Interactions with common medications\n\n\
         Format your response as JSON with keys: summary, recommendations, \
         confidence, concerns",
        name = product.product_name,
        ingredients = if product.ingredients.is_empty() {
            "Not provided"
        } else {
            &product.ingredients
        },
        nutrition = nutrition,
        category = if product.category().is_empty() {
            "Unknown"
        } else {
            product.category()
        },
        profile = profile,
    )
}

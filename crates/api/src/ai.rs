//! Client for the optional description-drafting feature: a single prompt to
//! an OpenAI-compatible gateway that returns a short class description for
//! the admin form.

use eyre::{eyre, Result};
use seenfit_core::models::admin::DescribeRequest;
use serde_json::{json, Value};

const GATEWAY_URL: &str = "https://ai-gateway.vercel.sh/v1/chat/completions";
const MODEL: &str = "openai/gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You write short, compelling class descriptions for a boutique fitness \
studio in the Atlanta area. The studio specializes in strength & conditioning, kickboxing & \
self-defense, and somatic movement. Descriptions should be 2-3 sentences, SEO-friendly, warm and \
inclusive, and never use generic gym cliches. Return ONLY the description text, no quotes, no \
labels, no markdown.";

/// Asks the gateway for a description draft. Name and type must already be
/// validated by the caller.
pub async fn generate_description(
    api_key: &str,
    name: &str,
    class_type: &str,
    request: &DescribeRequest,
) -> Result<String> {
    let mut prompt = format!("Write a class description for:\n- Class name: {name}\n- Type: {class_type}");
    if let Some(instructor) = request.instructor.as_deref().filter(|i| !i.trim().is_empty()) {
        prompt.push_str(&format!("\n- Instructor: {instructor}"));
    }
    if let Some(duration) = request.duration_minutes {
        prompt.push_str(&format!("\n- Duration: {duration} minutes"));
    }
    if let Some(capacity) = request.capacity {
        prompt.push_str(&format!("\n- Max class size: {capacity} people"));
    }

    let client = reqwest::Client::new();
    let response = client
        .post(GATEWAY_URL)
        .bearer_auth(api_key)
        .json(&json!({
            "model": MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(eyre!("AI gateway returned {status}"));
    }

    let body: Value = response.json().await?;
    let text = body["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| eyre!("AI gateway response missing message content"))?;

    Ok(text.trim().to_string())
}

//! AI analyst narrative
//!
//! Sends the window's summary and breakdown to a text-generation endpoint
//! and returns the narrative as an opaque Markdown string. Every failure
//! mode (missing configuration, transport error, unexpected response shape)
//! degrades to a fixed fallback message; callers never see an error.

use serde_json::json;
use shared::models::{AggregatedBucket, DashboardSummary};

use crate::core::Config;

/// Returned whenever the endpoint cannot produce an analysis
pub const NARRATIVE_FALLBACK: &str =
    "An error occurred while communicating with the AI analyst. Please verify the narrative \
     endpoint configuration and try again.";

/// Returned on a well-formed but empty generation result
const EMPTY_RESULT: &str = "Unable to generate analysis at this time.";

/// Build the revenue-manager prompt for a window.
pub fn build_prompt(
    summary: &DashboardSummary,
    breakdown: &[AggregatedBucket],
    start: &str,
    end: &str,
) -> String {
    let mut prompt = format!(
        "You are a Senior Revenue Manager Analyst for a high-end hotel chain.\n\
         Analyze the following sales performance data for the period: {start} to {end}.\n\n\
         **Executive Summary:**\n\
         - Total Revenue: Rp {:.0}\n\
         - Average Occupancy: {:.2}%\n\
         - Top Room Type: {}\n\
         - Total Bookings: {}\n\n\
         **Breakdown by Room Type:**\n",
        summary.total_revenue,
        summary.average_occupancy,
        summary.top_performing_room_type,
        summary.total_bookings,
    );

    for bucket in breakdown {
        prompt.push_str(&format!(
            "- {}:\n  - Revenue: Rp {:.0}\n  - Avg OCC: {:.2}%\n",
            bucket.room_type, bucket.total_revenue, bucket.average_occupancy,
        ));
    }

    prompt.push_str(
        "\n**Instructions:**\n\
         1. Provide a \"Deep Dive\" analysis of the data. Look for correlations between room \
         types and revenue efficiency.\n\
         2. Identify specific underperforming areas compared to the top performers.\n\
         3. Suggest 3 concrete, actionable strategies to improve Revenue per Available Room \
         (RevPAR) for the next period.\n\
         4. Use professional, executive-level language.\n\
         5. Format the output in clean Markdown.\n",
    );

    prompt
}

/// Request a narrative for the window. Infallible by contract: any failure
/// returns the fallback message.
pub async fn analyze_performance(
    config: &Config,
    summary: &DashboardSummary,
    breakdown: &[AggregatedBucket],
    start: &str,
    end: &str,
) -> String {
    let Some(base_url) = config.narrative_api_url.as_deref() else {
        tracing::warn!("NARRATIVE_API_URL not configured, returning fallback narrative");
        return NARRATIVE_FALLBACK.to_string();
    };

    let prompt = build_prompt(summary, breakdown, start, end);
    let url = format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        config.narrative_model,
    );

    let client = reqwest::Client::new();
    let mut request = client.post(&url).json(&json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    }));
    if let Some(key) = config.narrative_api_key.as_deref() {
        request = request.query(&[("key", key)]);
    }

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Narrative request failed");
            return NARRATIVE_FALLBACK.to_string();
        }
    };

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "Narrative endpoint returned non-success");
        return NARRATIVE_FALLBACK.to_string();
    }

    let body: serde_json::Value = match response.json().await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "Narrative response was not valid JSON");
            return NARRATIVE_FALLBACK.to_string();
        }
    };

    match body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
    {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => EMPTY_RESULT.to_string(),
    }
}

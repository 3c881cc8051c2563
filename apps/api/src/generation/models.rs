//! Request and result value objects for one generation round trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::catalog::Pillar;

fn default_tone() -> String {
    "professional".to_string()
}

/// The structured form submission. Every field defaults when absent so that a
/// missing `topic` is reported by `validate()` rather than by the JSON decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogRequest {
    pub topic: String,
    /// Audience tag (e.g. `junior-developers`) or free text.
    pub audience: String,
    pub main_problem: String,
    /// Tone tag (e.g. `professional`) or free text.
    pub tone: String,
    pub evidence: Vec<String>,
    pub practical: Vec<String>,
    pub analytical: Vec<String>,
    pub speculative: Vec<String>,
    pub contextual: Vec<String>,
    pub engagement: Vec<String>,
}

impl Default for BlogRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            audience: String::new(),
            main_problem: String::new(),
            tone: default_tone(),
            evidence: Vec::new(),
            practical: Vec::new(),
            analytical: Vec::new(),
            speculative: Vec::new(),
            contextual: Vec::new(),
            engagement: Vec::new(),
        }
    }
}

impl BlogRequest {
    /// Element keys the user ticked for one pillar, in submission order.
    pub fn selection(&self, pillar: Pillar) -> &[String] {
        match pillar {
            Pillar::Evidence => &self.evidence,
            Pillar::Practical => &self.practical,
            Pillar::Analytical => &self.analytical,
            Pillar::Speculative => &self.speculative,
            Pillar::Contextual => &self.contextual,
            Pillar::Engagement => &self.engagement,
        }
    }

    /// Rejects requests whose `topic` or `mainProblem` is blank.
    /// Must pass before the prompt is built or any upstream call is made.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.topic.trim().is_empty() {
            missing.push("topic");
        }
        if self.main_problem.trim().is_empty() {
            missing.push("mainProblem");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// The client-held record of a finished generation: the original request plus
/// the raw model output. Overwritten wholesale by the next generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBlog {
    #[serde(flatten)]
    pub request: BlogRequest,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}

impl GeneratedBlog {
    pub fn new(request: BlogRequest, content: String) -> Self {
        Self {
            request,
            content,
            generated_at: Utc::now(),
        }
    }
}

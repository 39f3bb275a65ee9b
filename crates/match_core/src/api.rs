//! Response payloads of the matching backend and the failure shape the core
//! turns into notifications.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: MatchScore,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall_match: f64,
    pub components: ComponentScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub skill_match: f64,
    pub experience_match: f64,
    pub keyword_match: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub section: String,
    pub suggestion: String,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RefineResult {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// Why a request did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Non-2xx status; `detail` is the JSON body's `detail` field if present.
    Server { status: u16, detail: Option<String> },
    /// Connection, timeout or local IO problem before a response arrived.
    Transport(String),
    /// A 2xx response whose body did not have the expected shape.
    MalformedBody(String),
}

impl RequestFailure {
    /// Notification text for a failed analyze request.
    pub fn analyze_message(&self) -> String {
        match self {
            RequestFailure::Server { detail, .. } => non_empty(detail.as_deref())
                .unwrap_or("Analysis failed")
                .to_string(),
            RequestFailure::Transport(message) | RequestFailure::MalformedBody(message) => {
                non_empty(Some(message))
                    .unwrap_or("Failed to analyze resume. Please try again.")
                    .to_string()
            }
        }
    }

    /// Notification text for a failed refine request. A server-provided
    /// `detail` is shown as is; everything else gets the refine prefix.
    pub fn refine_message(&self) -> String {
        let reason = match self {
            RequestFailure::Server { status, detail } => match non_empty(detail.as_deref()) {
                Some(detail) => return detail.to_string(),
                None => format!("HTTP {status}: Refinement failed"),
            },
            RequestFailure::Transport(message) | RequestFailure::MalformedBody(message) => {
                message.clone()
            }
        };
        format!("Failed to refine resume: {reason}")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

//! Turns backend payloads into display-ready labels and HTML fragments.
//!
//! Every string that originates from the server is passed through
//! [`escape_html`] before it is placed in markup.

use std::time::Duration;

use crate::api::{MatchResult, RefineResult, Suggestion};
use crate::escape::escape_html;

/// Delay before a score bar width is applied, so the zero-width start state
/// is painted first and the CSS transition runs.
pub const SCORE_BAR_DELAY: Duration = Duration::from_millis(100);

pub const NO_SUMMARY_TEXT: &str = "No summary generated";
pub const NO_EXPERIENCE_TEXT: &str = "No experience generated";

const BULLET_MARKERS: [char; 2] = ['-', '•'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Skill,
    Experience,
    Keyword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBarView {
    pub kind: ScoreKind,
    pub label: String,
    pub width_percent: f64,
    pub animate_after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResultView {
    pub overall_label: String,
    pub bars: Vec<ScoreBarView>,
    pub missing_skills: Vec<String>,
    /// `None` hides the missing-skills section.
    pub missing_skills_html: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub suggestions_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinedView {
    /// Plain text; the binding layer escapes it on insertion.
    pub summary_text: String,
    /// Bullet lines without their markers; empty when the paragraph fallback is used.
    pub experience_bullets: Vec<String>,
    pub experience_html: String,
}

pub fn render_match(result: &MatchResult) -> MatchResultView {
    let components = &result.match_score.components;
    let bars = vec![
        score_bar(ScoreKind::Skill, components.skill_match),
        score_bar(ScoreKind::Experience, components.experience_match),
        score_bar(ScoreKind::Keyword, components.keyword_match),
    ];

    let missing_skills_html = if result.missing_skills.is_empty() {
        None
    } else {
        Some(
            result
                .missing_skills
                .iter()
                .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, escape_html(skill)))
                .collect(),
        )
    };

    MatchResultView {
        overall_label: percent_label(result.match_score.overall_match),
        bars,
        missing_skills: result.missing_skills.clone(),
        missing_skills_html,
        suggestions: result.suggestions.clone(),
        suggestions_html: result.suggestions.iter().map(suggestion_block).collect(),
    }
}

pub fn render_refine(result: &RefineResult) -> RefinedView {
    let summary_text = non_empty(result.summary.as_deref())
        .unwrap_or(NO_SUMMARY_TEXT)
        .to_string();
    let experience = non_empty(result.experience.as_deref()).unwrap_or(NO_EXPERIENCE_TEXT);

    let bullets = experience_bullets(experience);
    let experience_html = if bullets.is_empty() {
        format!("<p>{}</p>", escape_html(experience))
    } else {
        bullets
            .iter()
            .map(|line| {
                format!(
                    r#"<div style="margin-bottom: 8px;"><strong>✓</strong> {}</div>"#,
                    escape_html(line)
                )
            })
            .collect()
    };

    RefinedView {
        summary_text,
        experience_bullets: bullets,
        experience_html,
    }
}

/// Lines that start with a `-` or `•` marker (after trimming), with the marker
/// and the whitespace after it removed.
pub fn experience_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(BULLET_MARKERS))
        .map(|rest| rest.trim_start().to_string())
        .collect()
}

/// Rounds half up like a browser's `Math.round` and appends `%`.
pub fn percent_label(score: f64) -> String {
    format!("{}%", (score + 0.5).floor() as i64)
}

fn score_bar(kind: ScoreKind, score: f64) -> ScoreBarView {
    ScoreBarView {
        kind,
        label: percent_label(score),
        width_percent: score.clamp(0.0, 100.0),
        animate_after: SCORE_BAR_DELAY,
    }
}

fn suggestion_block(suggestion: &Suggestion) -> String {
    format!(
        concat!(
            r#"<div class="suggestion-item">"#,
            "<h5>{}</h5>",
            "<p><strong>{}</strong></p>",
            "<small>{}</small>",
            "</div>"
        ),
        escape_html(&suggestion.section),
        escape_html(&suggestion.suggestion),
        escape_html(&suggestion.justification),
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

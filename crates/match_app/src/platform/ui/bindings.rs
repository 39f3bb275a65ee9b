//! The page elements the controller writes to, and the binding table that
//! locates them in the page template once at startup.

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    FileUpload,
    ResumeFile,
    UploadPlaceholder,
    FileInfo,
    FileName,
    FileSize,
    JobDescription,
    AnalyzeBtn,
    BtnText,
    Spinner,
    Results,
    OverallScore,
    SkillScore,
    SkillProgress,
    ExpScore,
    ExpProgress,
    KeywordScore,
    KeywordProgress,
    MissingSkillsSection,
    MissingSkills,
    SuggestionsList,
    RefineBtn,
    RefineBtnText,
    RefineSpinner,
    RefinedContent,
    RefinedSummary,
    RefinedExperience,
    Notifications,
}

impl ElementId {
    pub const ALL: [ElementId; 28] = [
        ElementId::FileUpload,
        ElementId::ResumeFile,
        ElementId::UploadPlaceholder,
        ElementId::FileInfo,
        ElementId::FileName,
        ElementId::FileSize,
        ElementId::JobDescription,
        ElementId::AnalyzeBtn,
        ElementId::BtnText,
        ElementId::Spinner,
        ElementId::Results,
        ElementId::OverallScore,
        ElementId::SkillScore,
        ElementId::SkillProgress,
        ElementId::ExpScore,
        ElementId::ExpProgress,
        ElementId::KeywordScore,
        ElementId::KeywordProgress,
        ElementId::MissingSkillsSection,
        ElementId::MissingSkills,
        ElementId::SuggestionsList,
        ElementId::RefineBtn,
        ElementId::RefineBtnText,
        ElementId::RefineSpinner,
        ElementId::RefinedContent,
        ElementId::RefinedSummary,
        ElementId::RefinedExperience,
        ElementId::Notifications,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            ElementId::FileUpload => "fileUpload",
            ElementId::ResumeFile => "resumeFile",
            ElementId::UploadPlaceholder => "uploadPlaceholder",
            ElementId::FileInfo => "fileInfo",
            ElementId::FileName => "fileName",
            ElementId::FileSize => "fileSize",
            ElementId::JobDescription => "jobDescription",
            ElementId::AnalyzeBtn => "analyzeBtn",
            ElementId::BtnText => "btnText",
            ElementId::Spinner => "spinner",
            ElementId::Results => "results",
            ElementId::OverallScore => "overallScore",
            ElementId::SkillScore => "skillScore",
            ElementId::SkillProgress => "skillProgress",
            ElementId::ExpScore => "expScore",
            ElementId::ExpProgress => "expProgress",
            ElementId::KeywordScore => "keywordScore",
            ElementId::KeywordProgress => "keywordProgress",
            ElementId::MissingSkillsSection => "missingSkillsSection",
            ElementId::MissingSkills => "missingSkills",
            ElementId::SuggestionsList => "suggestionsList",
            ElementId::RefineBtn => "refineBtn",
            ElementId::RefineBtnText => "refineBtnText",
            ElementId::RefineSpinner => "refineSpinner",
            ElementId::RefinedContent => "refinedContent",
            ElementId::RefinedSummary => "refinedSummary",
            ElementId::RefinedExperience => "refinedExperience",
            ElementId::Notifications => "notifications",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("page template is missing element(s): {}", .0.join(", "))]
    MissingElements(Vec<&'static str>),
    #[error("element #{0} must be declared as id=\"{0}\" exactly once")]
    AmbiguousElement(&'static str),
}

/// Where an element's opening tag sits in the template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    /// Byte offset of the `>` closing the opening tag.
    pub close: usize,
    /// True for `<input ... />`-style tags that take no content.
    pub self_closing: bool,
}

#[derive(Debug, Clone)]
pub struct PageBindings {
    template: String,
    spans: BTreeMap<ElementId, TagSpan>,
}

impl PageBindings {
    pub fn from_template(template: &str) -> Result<Self, BindingError> {
        let document = Html::parse_document(template);
        let missing: Vec<&'static str> = ElementId::ALL
            .iter()
            .map(|id| id.dom_id())
            .filter(|dom_id| {
                Selector::parse(&format!("#{dom_id}"))
                    .map(|selector| document.select(&selector).next().is_none())
                    .unwrap_or(true)
            })
            .collect();
        if !missing.is_empty() {
            return Err(BindingError::MissingElements(missing));
        }

        let mut spans = BTreeMap::new();
        for id in ElementId::ALL {
            spans.insert(id, locate_tag(template, id.dom_id())?);
        }

        Ok(Self {
            template: template.to_string(),
            spans,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Bound elements ordered by their position in the template.
    pub fn in_document_order(&self) -> Vec<(ElementId, TagSpan)> {
        let mut ordered: Vec<(ElementId, TagSpan)> =
            self.spans.iter().map(|(id, span)| (*id, *span)).collect();
        ordered.sort_by_key(|(_, span)| span.close);
        ordered
    }
}

/// Finds the opening tag carrying `id="<dom_id>"`. The id must be written
/// with double quotes; `>` inside quoted attribute values is skipped, and the
/// id may appear as an attribute of exactly one tag.
fn locate_tag(template: &str, dom_id: &'static str) -> Result<TagSpan, BindingError> {
    let needle = format!("id=\"{dom_id}\"");
    let mut starts = template
        .match_indices(&needle)
        .map(|(start, _)| start)
        .filter(|&start| is_attribute_start(template, start));
    let start = starts
        .next()
        .ok_or(BindingError::AmbiguousElement(dom_id))?;
    if starts.next().is_some() {
        return Err(BindingError::AmbiguousElement(dom_id));
    }
    let close =
        tag_end(template, start + needle.len()).ok_or(BindingError::AmbiguousElement(dom_id))?;
    let self_closing = template[..close].ends_with('/');
    Ok(TagSpan {
        close,
        self_closing,
    })
}

/// Rejects matches that are the tail of another attribute such as `data-id`.
fn is_attribute_start(template: &str, start: usize) -> bool {
    template[..start]
        .chars()
        .next_back()
        .is_some_and(char::is_whitespace)
}

/// Byte offset of the `>` that ends the tag, ignoring quoted values.
fn tag_end(template: &str, from: usize) -> Option<usize> {
    let mut quote = None;
    for (offset, ch) in template[from..].char_indices() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '>' => return Some(from + offset),
            None => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::PAGE_TEMPLATE;

    #[test]
    fn bundled_template_binds_every_element() {
        let bindings = PageBindings::from_template(PAGE_TEMPLATE).expect("template binds");
        let spans = bindings.in_document_order();
        assert_eq!(spans.len(), ElementId::ALL.len());
        let self_closing: Vec<ElementId> = spans
            .iter()
            .filter(|(_, span)| span.self_closing)
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(self_closing, vec![ElementId::ResumeFile]);
    }

    #[test]
    fn missing_elements_fail_fast() {
        let template = PAGE_TEMPLATE.replace(r#"id="overallScore""#, r#"id="score""#);
        let err = PageBindings::from_template(&template).unwrap_err();
        assert_eq!(err, BindingError::MissingElements(vec!["overallScore"]));
    }

    #[test]
    fn quoted_angle_brackets_do_not_end_the_tag() {
        let template = PAGE_TEMPLATE.replace(
            r#"id="results">"#,
            r#"id="results" data-note="a > b">"#,
        );
        let bindings = PageBindings::from_template(&template).unwrap();
        let (_, span) = bindings
            .in_document_order()
            .into_iter()
            .find(|(id, _)| *id == ElementId::Results)
            .unwrap();

        assert!(template[..span.close].ends_with(r#"data-note="a > b""#));
    }

    #[test]
    fn data_attributes_do_not_count_as_ids() {
        let template = PAGE_TEMPLATE.replace(
            "</body>",
            r#"<span data-id="spinner"></span></body>"#,
        );
        assert!(PageBindings::from_template(&template).is_ok());
    }

    #[test]
    fn duplicated_ids_are_rejected() {
        let template = PAGE_TEMPLATE.replace(
            "</body>",
            r#"<span id="spinner"></span></body>"#,
        );
        let err = PageBindings::from_template(&template).unwrap_err();
        assert_eq!(err, BindingError::AmbiguousElement("spinner"));
    }
}

use std::collections::BTreeMap;

use match_core::escape_html;

use super::bindings::{ElementId, PageBindings};

/// One mutation of a bound page element.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    SetText { id: ElementId, text: String },
    /// Markup that has already been escaped by the core renderer.
    SetHtml { id: ElementId, html: String },
    SetVisible { id: ElementId, visible: bool },
    SetEnabled { id: ElementId, enabled: bool },
    SetStyle { id: ElementId, style: Option<String> },
    SetState { id: ElementId, state: Option<&'static str> },
    ClearValue { id: ElementId },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ElementState {
    hidden: bool,
    disabled: bool,
    content: Option<Content>,
    style: Option<String>,
    state: Option<&'static str>,
    value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Text(String),
    Html(String),
}

/// In-memory page: the bound template plus the current state of each element.
#[derive(Debug, Clone)]
pub struct Page {
    bindings: PageBindings,
    elements: BTreeMap<ElementId, ElementState>,
    scroll_target: Option<ElementId>,
}

impl Page {
    pub fn new(bindings: PageBindings) -> Self {
        Self {
            bindings,
            elements: BTreeMap::new(),
            scroll_target: None,
        }
    }

    pub fn apply(&mut self, commands: Vec<PageCommand>) {
        for command in commands {
            self.apply_one(command);
        }
    }

    fn apply_one(&mut self, command: PageCommand) {
        match command {
            PageCommand::SetText { id, text } => {
                self.element(id).content = Some(Content::Text(text));
            }
            PageCommand::SetHtml { id, html } => {
                self.element(id).content = Some(Content::Html(html));
            }
            PageCommand::SetVisible { id, visible } => self.element(id).hidden = !visible,
            PageCommand::SetEnabled { id, enabled } => self.element(id).disabled = !enabled,
            PageCommand::SetStyle { id, style } => self.element(id).style = style,
            PageCommand::SetState { id, state } => self.element(id).state = state,
            PageCommand::ClearValue { id } => self.element(id).value = Some(String::new()),
        }
    }

    pub fn scroll_to(&mut self, id: ElementId) {
        self.scroll_target = Some(id);
    }

    pub fn scroll_target(&self) -> Option<ElementId> {
        self.scroll_target
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        !self.elements.get(&id).map(|e| e.hidden).unwrap_or(false)
    }

    /// Unescaped text or pre-rendered markup last written to the element.
    pub fn content(&self, id: ElementId) -> Option<&str> {
        match self.elements.get(&id)?.content.as_ref()? {
            Content::Text(text) | Content::Html(text) => Some(text),
        }
    }

    /// Serialises the template with every bound element's state applied.
    pub fn to_html(&self) -> String {
        let template = self.bindings.template();
        let mut out = String::with_capacity(template.len() * 2);
        let mut cursor = 0;
        let untouched = ElementState::default();

        for (id, span) in self.bindings.in_document_order() {
            let state = match self.elements.get(&id) {
                Some(state) => state,
                None if self.scroll_target == Some(id) => &untouched,
                None => continue,
            };
            let attr_end = if span.self_closing {
                template[..span.close - 1].trim_end().len()
            } else {
                span.close
            };
            out.push_str(&template[cursor..attr_end]);
            out.push_str(&self.attributes(id, state));
            out.push_str(&template[attr_end..=span.close]);
            if !span.self_closing {
                match &state.content {
                    Some(Content::Text(text)) => out.push_str(&escape_html(text)),
                    Some(Content::Html(html)) => out.push_str(html),
                    None => {}
                }
            }
            cursor = span.close + 1;
        }
        out.push_str(&template[cursor..]);
        out
    }

    fn attributes(&self, id: ElementId, state: &ElementState) -> String {
        let mut attrs = String::new();
        if state.hidden {
            attrs.push_str(" hidden");
        }
        if state.disabled {
            attrs.push_str(" disabled");
        }
        if let Some(style) = &state.style {
            attrs.push_str(&format!(r#" style="{}""#, escape_attribute(style)));
        }
        if let Some(value) = state.state {
            attrs.push_str(&format!(r#" data-state="{value}""#));
        }
        if let Some(value) = &state.value {
            attrs.push_str(&format!(r#" value="{}""#, escape_attribute(value)));
        }
        if self.scroll_target == Some(id) {
            attrs.push_str(" data-scroll-target");
        }
        attrs
    }

    fn element(&mut self, id: ElementId) -> &mut ElementState {
        self.elements.entry(id).or_default()
    }
}

fn escape_attribute(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::PAGE_TEMPLATE;

    fn page() -> Page {
        Page::new(PageBindings::from_template(PAGE_TEMPLATE).unwrap())
    }

    #[test]
    fn untouched_page_serialises_to_template() {
        assert_eq!(page().to_html(), PAGE_TEMPLATE);
    }

    #[test]
    fn text_is_escaped_and_html_is_kept() {
        let mut page = page();
        page.apply(vec![
            PageCommand::SetText {
                id: ElementId::RefinedSummary,
                text: "<b>bold</b> & more".to_string(),
            },
            PageCommand::SetHtml {
                id: ElementId::MissingSkills,
                html: r#"<span class="skill-tag">SQL</span>"#.to_string(),
            },
        ]);

        let html = page.to_html();

        assert!(html.contains(r#"<p id="refinedSummary">&lt;b&gt;bold&lt;/b&gt; &amp; more</p>"#));
        assert!(html.contains(r#"<div id="missingSkills"><span class="skill-tag">SQL</span></div>"#));
    }

    #[test]
    fn attributes_follow_quoted_values_containing_angle_brackets() {
        let template = PAGE_TEMPLATE.replace(
            r#"id="results">"#,
            r#"id="results" title="score > 50">"#,
        );
        let mut page = Page::new(PageBindings::from_template(&template).unwrap());
        page.apply(vec![PageCommand::SetVisible {
            id: ElementId::Results,
            visible: false,
        }]);

        assert!(page
            .to_html()
            .contains(r#"id="results" title="score > 50" hidden>"#));
    }

    #[test]
    fn attributes_land_inside_opening_tags() {
        let mut page = page();
        page.apply(vec![
            PageCommand::SetVisible {
                id: ElementId::Results,
                visible: false,
            },
            PageCommand::SetEnabled {
                id: ElementId::AnalyzeBtn,
                enabled: false,
            },
            PageCommand::SetStyle {
                id: ElementId::SkillProgress,
                style: Some("width: 75%".to_string()),
            },
            PageCommand::ClearValue {
                id: ElementId::ResumeFile,
            },
        ]);
        page.scroll_to(ElementId::Results);

        let html = page.to_html();

        assert!(html.contains(r#"<section class="results" id="results" hidden data-scroll-target>"#));
        assert!(html.contains(r#"<button type="button" id="analyzeBtn" disabled>"#));
        assert!(html.contains(r#"id="skillProgress" style="width: 75%">"#));
        assert!(html.contains(r#"id="resumeFile" value="" />"#));
        assert!(!page.is_visible(ElementId::Results));
        assert_eq!(page.scroll_target(), Some(ElementId::Results));
    }
}

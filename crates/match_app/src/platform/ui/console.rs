//! Terminal presentation of the view model.

use std::io::{self, Write};

use match_core::{AppViewModel, FileInfoView, Panel, ScoreKind, Severity, ToastId};

const BAR_WIDTH: usize = 20;

/// Prints what changed in the view since the last call.
#[derive(Debug, Default)]
pub struct Console {
    last_toast: ToastId,
    last_file: Option<FileInfoView>,
    last_analyze_label: &'static str,
    last_refine_label: &'static str,
}

impl Console {
    pub fn present(&mut self, out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
        if view.file != self.last_file {
            match &view.file {
                Some(file) => writeln!(out, "Resume: {} ({})", file.name, file.size_label)?,
                None => writeln!(out, "Resume: none selected")?,
            }
            self.last_file = view.file.clone();
        }

        if view.analyze.busy && view.analyze.label != self.last_analyze_label {
            writeln!(out, "{}", view.analyze.label)?;
        }
        self.last_analyze_label = view.analyze.label;
        if view.refine.busy && view.refine.label != self.last_refine_label {
            writeln!(out, "{}", view.refine.label)?;
        }
        self.last_refine_label = view.refine.label;

        for toast in view.toasts.iter() {
            if toast.id > self.last_toast {
                writeln!(out, "[{}] {}", severity_tag(toast.severity), toast.message)?;
                self.last_toast = toast.id;
            }
        }
        Ok(())
    }

    /// Prints a panel once it has been scrolled into view.
    pub fn show_panel(
        &self,
        out: &mut impl Write,
        panel: Panel,
        view: &AppViewModel,
    ) -> io::Result<()> {
        match panel {
            Panel::Results => {
                let Some(results) = &view.results else {
                    return Ok(());
                };
                writeln!(out)?;
                writeln!(out, "Overall match: {}", results.overall_label)?;
                for bar in &results.bars {
                    writeln!(
                        out,
                        "  {:<17} {:>4}  {}",
                        score_name(bar.kind),
                        bar.label,
                        text_bar(bar.width_percent)
                    )?;
                }
                if !results.missing_skills.is_empty() {
                    writeln!(out, "Missing skills: {}", results.missing_skills.join(", "))?;
                }
                if !results.suggestions.is_empty() {
                    writeln!(out, "Suggestions:")?;
                }
                for suggestion in &results.suggestions {
                    writeln!(out, "  [{}] {}", suggestion.section, suggestion.suggestion)?;
                    writeln!(out, "      {}", suggestion.justification)?;
                }
            }
            Panel::Refined => {
                let Some(refined) = &view.refined else {
                    return Ok(());
                };
                writeln!(out)?;
                writeln!(out, "Refined summary:")?;
                writeln!(out, "  {}", refined.summary_text)?;
                writeln!(out, "Refined experience:")?;
                if refined.experience_bullets.is_empty() {
                    writeln!(out, "  (no bullet points returned)")?;
                }
                for bullet in &refined.experience_bullets {
                    writeln!(out, "  ✓ {bullet}")?;
                }
            }
        }
        Ok(())
    }
}

fn score_name(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Skill => "Skill match",
        ScoreKind::Experience => "Experience match",
        ScoreKind::Keyword => "Keyword match",
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Success => "ok",
        Severity::Info => "info",
    }
}

fn text_bar(width_percent: f64) -> String {
    let filled = ((width_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use match_core::{update, AppState, Msg};

    use super::*;

    #[test]
    fn toasts_are_printed_once() {
        let (state, _) = update(AppState::new(), Msg::RefineClicked);
        let mut console = Console::default();
        let mut out = Vec::new();

        console.present(&mut out, &state.view()).unwrap();
        console.present(&mut out, &state.view()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.matches("[error] Missing resume text or job description").count(),
            1
        );
    }

    #[test]
    fn text_bar_is_proportional() {
        assert_eq!(text_bar(0.0), format!("[{}]", ".".repeat(20)));
        assert_eq!(text_bar(50.0), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(text_bar(100.0), format!("[{}]", "#".repeat(20)));
    }
}

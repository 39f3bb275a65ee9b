use match_core::{
    escape_html, ActionView, AppViewModel, MatchResultView, RefinedView, ScoreBarView, ScoreKind,
    ToastPhase, ToastView,
};

use super::bindings::ElementId;
use super::page::PageCommand;

const UPLOAD_HINT: &str = "Drag & drop your resume here, or click to browse (PDF or DOCX, max 10MB)";

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(PageCommand::SetState {
        id: ElementId::FileUpload,
        state: view.drop_zone_active.then_some("drag-over"),
    });
    cmds.push(PageCommand::SetText {
        id: ElementId::UploadPlaceholder,
        text: UPLOAD_HINT.to_string(),
    });
    cmds.push(PageCommand::SetVisible {
        id: ElementId::UploadPlaceholder,
        visible: view.file.is_none(),
    });
    cmds.push(PageCommand::SetVisible {
        id: ElementId::FileInfo,
        visible: view.file.is_some(),
    });
    if let Some(file) = &view.file {
        cmds.push(PageCommand::SetText {
            id: ElementId::FileName,
            text: file.name.clone(),
        });
        cmds.push(PageCommand::SetText {
            id: ElementId::FileSize,
            text: file.size_label.clone(),
        });
    }

    cmds.push(PageCommand::SetText {
        id: ElementId::JobDescription,
        text: view.job_description.clone(),
    });

    render_action(
        &mut cmds,
        &view.analyze,
        ElementId::AnalyzeBtn,
        ElementId::BtnText,
        ElementId::Spinner,
    );
    render_action(
        &mut cmds,
        &view.refine,
        ElementId::RefineBtn,
        ElementId::RefineBtnText,
        ElementId::RefineSpinner,
    );

    cmds.push(PageCommand::SetVisible {
        id: ElementId::Results,
        visible: view.results.is_some(),
    });
    if let Some(results) = &view.results {
        render_results(&mut cmds, results);
    }

    cmds.push(PageCommand::SetVisible {
        id: ElementId::RefinedContent,
        visible: view.refined.is_some(),
    });
    if let Some(refined) = &view.refined {
        render_refined(&mut cmds, refined);
    }

    cmds.push(PageCommand::SetHtml {
        id: ElementId::Notifications,
        html: view.toasts.iter().map(toast_html).collect(),
    });

    cmds
}

fn render_action(
    cmds: &mut Vec<PageCommand>,
    action: &ActionView,
    button: ElementId,
    label: ElementId,
    spinner: ElementId,
) {
    cmds.push(PageCommand::SetEnabled {
        id: button,
        enabled: action.enabled,
    });
    cmds.push(PageCommand::SetText {
        id: label,
        text: action.label.to_string(),
    });
    cmds.push(PageCommand::SetVisible {
        id: spinner,
        visible: action.busy,
    });
}

fn render_results(cmds: &mut Vec<PageCommand>, results: &MatchResultView) {
    cmds.push(PageCommand::SetText {
        id: ElementId::OverallScore,
        text: results.overall_label.clone(),
    });
    for bar in &results.bars {
        let (score_id, progress_id) = score_elements(bar.kind);
        cmds.push(PageCommand::SetText {
            id: score_id,
            text: bar.label.clone(),
        });
        cmds.push(PageCommand::SetStyle {
            id: progress_id,
            style: Some(bar_style(bar)),
        });
    }

    cmds.push(PageCommand::SetVisible {
        id: ElementId::MissingSkillsSection,
        visible: results.missing_skills_html.is_some(),
    });
    cmds.push(PageCommand::SetHtml {
        id: ElementId::MissingSkills,
        html: results.missing_skills_html.clone().unwrap_or_default(),
    });
    cmds.push(PageCommand::SetHtml {
        id: ElementId::SuggestionsList,
        html: results.suggestions_html.clone(),
    });
}

fn render_refined(cmds: &mut Vec<PageCommand>, refined: &RefinedView) {
    cmds.push(PageCommand::SetText {
        id: ElementId::RefinedSummary,
        text: refined.summary_text.clone(),
    });
    cmds.push(PageCommand::SetHtml {
        id: ElementId::RefinedExperience,
        html: refined.experience_html.clone(),
    });
}

fn score_elements(kind: ScoreKind) -> (ElementId, ElementId) {
    match kind {
        ScoreKind::Skill => (ElementId::SkillScore, ElementId::SkillProgress),
        ScoreKind::Experience => (ElementId::ExpScore, ElementId::ExpProgress),
        ScoreKind::Keyword => (ElementId::KeywordScore, ElementId::KeywordProgress),
    }
}

/// The width transition starts after the bar's delay, from the zero width
/// the stylesheet gives every bar.
fn bar_style(bar: &ScoreBarView) -> String {
    format!(
        "width: {}%; transition-delay: {}ms",
        bar.width_percent,
        bar.animate_after.as_millis()
    )
}

fn toast_html(toast: &ToastView) -> String {
    let phase = match toast.phase {
        ToastPhase::Visible => "visible",
        ToastPhase::Fading => "fading",
    };
    format!(
        r#"<div class="toast" data-toast-id="{}" data-phase="{}" style="top: {}px; background: {};">{}</div>"#,
        toast.id,
        phase,
        toast.top_px,
        toast.color,
        escape_html(&toast.message)
    )
}

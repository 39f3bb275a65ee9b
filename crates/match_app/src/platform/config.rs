use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use match_core::{SelectedFile, MIME_DOCX, MIME_PDF};
use match_engine::{resolve_base_url, ApiSettings, PageLocation};

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Parser)]
#[command(name = "resume-match")]
#[command(about = "Score a resume against a job description and refine it")]
pub struct Cli {
    /// Resume file to upload (PDF or DOCX)
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Job description text
    #[arg(short, long, conflicts_with = "job_file", required_unless_present = "job_file")]
    pub job: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Also request a refined summary and experience section
    #[arg(long)]
    pub refine: bool,

    /// Backend API root, e.g. https://match.example.com/api/v1
    #[arg(long, env = "RESUME_MATCH_API_URL")]
    pub api_url: Option<String>,

    /// Origin the page would be served from; derives the API root when --api-url is absent
    #[arg(long)]
    pub page_origin: Option<String>,

    /// Write the rendered page to this HTML file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Log to the terminal as well as the log file
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub resume: SelectedFile,
    pub job_description: String,
    pub refine: bool,
    pub api: ApiSettings,
    pub report: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let job_description = match (&cli.job, &cli.job_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read job description {}", path.display()))?,
            (None, None) => String::new(),
        };

        let base_url = match &cli.api_url {
            Some(url) => url.clone(),
            None => {
                let location = cli
                    .page_origin
                    .as_deref()
                    .map(PageLocation::from_origin)
                    .transpose()?;
                resolve_base_url(location.as_ref())
            }
        };

        Ok(Self {
            resume: selected_file_from_path(&cli.resume)?,
            job_description,
            refine: cli.refine,
            api: ApiSettings {
                base_url,
                request_timeout: Duration::from_secs(cli.timeout_secs),
                ..ApiSettings::default()
            },
            report: cli.report.clone(),
        })
    }
}

/// Builds the file metadata a browser would report for a picked file.
pub fn selected_file_from_path(path: &Path) -> Result<SelectedFile> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SelectedFile {
        name,
        size: metadata.len(),
        mime_type: mime_for_path(path).to_string(),
        path: path.to_path_buf(),
    })
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => MIME_PDF,
        Some("docx") => MIME_DOCX,
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("resume-match").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for_path(Path::new("cv.PDF")), MIME_PDF);
        assert_eq!(mime_for_path(Path::new("cv.docx")), MIME_DOCX);
        assert_eq!(mime_for_path(Path::new("cv.doc")), FALLBACK_MIME);
        assert_eq!(mime_for_path(Path::new("cv")), FALLBACK_MIME);
    }

    #[test]
    fn job_text_or_file_is_required() {
        let result =
            Cli::try_parse_from(["resume-match", "--resume", "cv.pdf", "--api-url", "http://x"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_reads_file_metadata_and_origin() {
        let mut resume = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        resume.write_all(&[0u8; 2048]).unwrap();
        let resume_path = resume.path().to_string_lossy().into_owned();

        let mut cli = parse(&[
            "--resume",
            &resume_path,
            "--job",
            "Backend engineer",
            "--page-origin",
            "https://match.example.com:8443",
        ]);
        // RESUME_MATCH_API_URL may be set in the environment.
        cli.api_url = None;
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.resume.size, 2048);
        assert_eq!(config.resume.mime_type, MIME_PDF);
        assert_eq!(config.job_description, "Backend engineer");
        assert_eq!(config.api.base_url, "https://match.example.com/api/v1");
        assert_eq!(config.api.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn explicit_api_url_wins() {
        let resume = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let resume_path = resume.path().to_string_lossy().into_owned();

        let cli = parse(&[
            "--resume",
            &resume_path,
            "--job",
            "x",
            "--api-url",
            "http://10.0.0.5:9000/api/v1",
            "--page-origin",
            "https://match.example.com",
        ]);
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.api.base_url, "http://10.0.0.5:9000/api/v1");
        assert_eq!(config.resume.mime_type, MIME_DOCX);
    }

    #[test]
    fn job_description_from_file() {
        let resume = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let mut job = tempfile::NamedTempFile::new().unwrap();
        job.write_all(b"Senior Rust engineer").unwrap();

        let resume_path = resume.path().to_string_lossy().into_owned();
        let job_path = job.path().to_string_lossy().into_owned();
        let mut cli = parse(&["--resume", &resume_path, "--job-file", &job_path]);
        cli.api_url = None;
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.job_description, "Senior Rust engineer");
        assert_eq!(config.api.base_url, match_engine::LOCAL_API_BASE);
    }
}

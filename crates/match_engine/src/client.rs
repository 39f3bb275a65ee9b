use std::time::Duration;

use match_core::{MatchResult, RefineResult, SelectedFile};
use match_logging::{match_info, match_warn};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::base_url::LOCAL_API_BASE;
use crate::{ApiError, FailureKind};

const MATCH_ENDPOINT: &str = "/match/";
const REFINE_ENDPOINT: &str = "/refine/";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Versioned API root without a trailing slash, e.g. `http://localhost:8000/api/v1`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: LOCAL_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl ApiSettings {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// The two backend operations the controller needs.
#[async_trait::async_trait]
pub trait MatchApi: Send + Sync {
    async fn analyze(
        &self,
        file: &SelectedFile,
        job_description: &str,
    ) -> Result<MatchResult, ApiError>;

    async fn refine(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<RefineResult, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let url = reqwest::Url::parse(&self.settings.endpoint(path))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        match_info!("POST {}", url);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let detail = error_detail(&body);
            match_warn!(
                "POST {} returned {} detail={:?}",
                path,
                status.as_u16(),
                detail
            );
            return Err(ApiError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    detail,
                },
                status.to_string(),
            ));
        }

        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

#[async_trait::async_trait]
impl MatchApi for ReqwestApi {
    async fn analyze(
        &self,
        file: &SelectedFile,
        job_description: &str,
    ) -> Result<MatchResult, ApiError> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|err| {
            ApiError::new(
                FailureKind::FileRead,
                format!("could not read {}: {}", file.path.display(), err),
            )
        })?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|err| ApiError::new(FailureKind::FileRead, err.to_string()))?;
        let form = Form::new()
            .part("resume_file", part)
            .text("job_description", job_description.to_string());

        self.post_form(MATCH_ENDPOINT, form).await
    }

    async fn refine(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<RefineResult, ApiError> {
        let form = Form::new()
            .text("resume_text", resume_text.to_string())
            .text("job_description", job_description.to_string());

        self.post_form(REFINE_ENDPOINT, form).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// `detail` from a JSON error body. Structured details (validation error
/// lists) are passed through as compact JSON text.
fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

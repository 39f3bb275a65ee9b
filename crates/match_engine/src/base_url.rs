use thiserror::Error;
use url::Url;

/// Backend used when the page is served locally or there is no page at all.
pub const LOCAL_API_BASE: &str = "http://localhost:8000/api/v1";

const API_PATH: &str = "/api/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("invalid page origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

/// Where the client page is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, e.g. `https:`.
    pub protocol: String,
    pub hostname: String,
}

impl PageLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }

    /// Parses an origin such as `https://match.example.com:8443`.
    pub fn from_origin(origin: &str) -> Result<Self, BaseUrlError> {
        let invalid = |reason: String| BaseUrlError::InvalidOrigin {
            origin: origin.to_string(),
            reason,
        };
        let parsed = Url::parse(origin).map_err(|err| invalid(err.to_string()))?;
        let hostname = parsed
            .host_str()
            .ok_or_else(|| invalid("missing host".to_string()))?;
        Ok(Self::new(format!("{}:", parsed.scheme()), hostname))
    }

    fn is_local(&self) -> bool {
        self.hostname == "localhost" || self.hostname == "127.0.0.1"
    }
}

/// Local pages talk to the local backend on port 8000; anything else assumes
/// the API is deployed on the same host as the page. The page's port is not
/// carried over.
pub fn resolve_base_url(location: Option<&PageLocation>) -> String {
    match location {
        Some(location) if !location.is_local() => {
            format!("{}//{}{}", location.protocol, location.hostname, API_PATH)
        }
        _ => LOCAL_API_BASE.to_string(),
    }
}

//! Resume match engine: backend client and effect execution.
mod base_url;
mod client;
mod engine;
mod report;
mod types;

pub use base_url::{resolve_base_url, BaseUrlError, PageLocation, LOCAL_API_BASE};
pub use client::{ApiSettings, MatchApi, ReqwestApi};
pub use engine::EngineHandle;
pub use report::{write_report, PersistError};
pub use types::{ApiError, EngineError, EngineEvent, FailureKind};

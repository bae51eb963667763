use std::time::Duration;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        ACCEPT,
        CONTENT_TYPE,
        USER_AGENT,
    },
    Client,
    Response,
};

use crate::core::TalentMatchError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn http_client(timeout: Duration) -> Result<Client, TalentMatchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static("talentmatch/0.1 (+reqwest)"));

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| TalentMatchError::Custom(format!("HTTP client build failed: {e}")))
}

/// Turns a non-2xx response into `TalentMatchError::Status`, keeping the body for the logs.
pub async fn ensure_success(resp: Response) -> Result<Response, TalentMatchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(TalentMatchError::Status { status, url, body })
}

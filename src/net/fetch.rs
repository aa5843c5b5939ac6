use url::Url;

use crate::error::{HeadOrderError, Result};

/// Result of fetching a URL
#[derive(Clone)]
pub struct FetchResult {
    pub html: String,
    pub url: String,
    pub status: u16,
    pub content_type: String,
}

/// Prepend `https://` to bare hosts and validate the result.
pub fn normalize_url(url_str: &str) -> Result<Url> {
    let url = if !url_str.starts_with("http://") && !url_str.starts_with("https://") {
        format!("https://{}", url_str)
    } else {
        url_str.to_string()
    };

    Url::parse(&url).map_err(|source| HeadOrderError::InvalidUrl { url, source })
}

/// Fetch a page and return its HTML (blocking).
///
/// Non-success statuses are logged and the body is still returned: error
/// pages have heads worth auditing too.
pub fn fetch_url(url_str: &str) -> Result<FetchResult> {
    let parsed = normalize_url(url_str)?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("head-order/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    log::info!("fetching {}", parsed);
    let response = client
        .get(parsed.as_str())
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("{} answered {}", parsed, status);
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    let final_url = response.url().to_string();
    let html = response.text()?;

    Ok(FetchResult {
        html,
        url: final_url,
        status: status.as_u16(),
        content_type,
    })
}

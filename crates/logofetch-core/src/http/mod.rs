//! Blocking HTTP GET over libcurl.
//!
//! One `Easy` handle per request, dropped when the call returns. Redirects are
//! followed; the body is collected in memory (team CSV and logo images are small).

mod error;

pub use error::FetchError;

use crate::config::FetchConfig;
use std::time::Duration;

const MAX_REDIRECTS: u32 = 10;

/// Per-request transfer settings shared by the CSV fetch and every logo fetch.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl From<&FetchConfig> for HttpOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// GETs `url` and returns the raw body. Non-2xx is `FetchError::Http`.
pub fn get_bytes(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.connect_timeout(opts.timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(&opts.user_agent)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    tracing::debug!("GET {} -> {} ({} bytes)", url, code, body.len());
    Ok(body)
}

/// GETs `url` and decodes the body as UTF-8, replacing invalid sequences with U+FFFD.
pub fn get_text(url: &str, opts: &HttpOptions) -> Result<String, FetchError> {
    let bytes = get_bytes(url, opts)?;
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

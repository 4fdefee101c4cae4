use url::Url;

use super::AppError;

/// Public URL of an app hosted under `domain`: `https://{name}.{domain}`.
///
/// The result has no trailing slash; webhook and editor URLs append one.
pub fn derive_app_url(name: &str, domain: &str) -> Result<String, AppError> {
    let domain = domain.trim_matches('.');
    let candidate = format!("https://{}.{}", name, domain);
    let parsed = Url::parse(&candidate).map_err(|err| AppError::InvalidAppName {
        name: name.to_string(),
        reason: err.to_string(),
    })?;

    let expected_host = format!("{}.{}", name, domain).to_ascii_lowercase();
    if parsed.host_str() != Some(expected_host.as_str()) || parsed.path() != "/" {
        return Err(AppError::InvalidAppName {
            name: name.to_string(),
            reason: format!("does not form a plain host under {}", domain),
        });
    }
    Ok(candidate)
}

/// URL with exactly one trailing slash, as n8n expects for webhook and editor bases.
pub fn with_trailing_slash(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

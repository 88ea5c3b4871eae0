//! API base URL resolution
//!
//! The translation service lives behind the same deployment as the
//! front-end, so the base URL follows the deployment environment:
//! production URL, then branch/preview URL, then an explicit override,
//! then the local dev server.

use std::env;

const LOCAL_API_URL: &str = "http://localhost:5002";

/// Resolve the translation API base URL from the process environment.
pub fn api_base_url() -> String {
    resolve(|key| env::var(key).ok())
}

fn resolve<F>(var: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if var("VERCEL_ENV").as_deref() == Some("production") {
        if let Some(host) = var("VERCEL_PROJECT_PRODUCTION_URL") {
            return format!("https://{}", host);
        }
    }

    if let Some(host) = var("VERCEL_BRANCH_URL") {
        return format!("https://{}", host);
    }

    var("APP_URL").unwrap_or_else(|| LOCAL_API_URL.to_string())
}

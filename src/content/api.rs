use reqwest::Client;

use crate::core::{
    ContentPatch,
    PageContentRecord,
    PageError,
};

fn page_url(server_url: &str, page_key: &str) -> String {
    format!("{}/api/pages/{}", server_url.trim_end_matches('/'), page_key)
}

/// The server URL comes from a user-editable settings file; check it up
/// front so a typo is reported once instead of as a failure on every
/// request.
pub fn validate_server_url(server_url: &str) -> Result<(), PageError> {
    reqwest::Url::parse(server_url)
        .map_err(|e| PageError::Custom(format!("Invalid server URL '{}': {}", server_url, e)))?;

    Ok(())
}

pub async fn fetch_page_content(
    client: &Client,
    server_url: &str,
    page_key: &str,
) -> Result<PageContentRecord, PageError> {
    let response = client.get(page_url(server_url, page_key)).send().await?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(PageError::PageUnavailable(page_key.to_string()));
    }

    let record = response.error_for_status()?.json::<PageContentRecord>().await?;

    Ok(record)
}

/// Full replace of the page's content payload. Any client-side merging has
/// already happened by the time this is called.
pub async fn update_page_content(
    client: &Client,
    server_url: &str,
    page_key: &str,
    patch: &ContentPatch,
) -> Result<(), PageError> {
    client
        .patch(page_url(server_url, page_key))
        .json(patch)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_must_parse() {
        assert!(validate_server_url("http://localhost:5000").is_ok());

        let err = validate_server_url("not a url").unwrap_err();
        assert!(matches!(err, PageError::Custom(_)));
    }

    #[test]
    fn page_url_tolerates_trailing_slash() {
        assert_eq!(
            page_url("http://localhost:5000/", "retrospective"),
            "http://localhost:5000/api/pages/retrospective"
        );
        assert_eq!(
            page_url("http://localhost:5000", "retrospective"),
            "http://localhost:5000/api/pages/retrospective"
        );
    }
}

use reqwest::{header::HeaderMap, Method};
use url::Url;

use crate::FetchError;

const USER_AGENT: &str = concat!("get-graphql-schema/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, serde::Serialize)]
struct Request<'a> {
    query: &'a str,
}

/// Sends the introspection query and returns the decoded response body.
///
/// The body is decoded whatever the status code, servers report GraphQL errors with 4xx/5xx too.
pub(super) async fn introspect(
    url: &Url,
    method: Method,
    headers: HeaderMap,
    query: &str,
) -> Result<serde_json::Value, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    tracing::debug!(%method, %url, "sending introspection query");

    // The headers already carry a content type, which the caller may have overridden.
    let body = serde_json::to_vec(&Request { query })?;

    let response = client
        .request(method, url.clone())
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;

    tracing::debug!(%status, bytes = body.len(), "received introspection response");

    Ok(serde_json::from_slice(&body)?)
}

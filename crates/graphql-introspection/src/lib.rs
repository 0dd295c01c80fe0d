#![cfg_attr(test, allow(unused_crate_dependencies))]

//! Fetches a GraphQL schema through introspection, from an HTTP endpoint or a local file, and
//! renders it as SDL or as the raw introspection JSON.

mod error;
mod headers;
mod local;
mod remote;
mod sdl;
mod source;

pub use error::FetchError;
pub use headers::{header_map, parse_headers, Header};
pub use reqwest::{header::HeaderMap, Method};
pub use source::SchemaSource;

use cynic::QueryBuilder;
use cynic_introspection::IntrospectionQuery;

/// How a fetched schema is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// GraphQL schema definition language
    #[default]
    Sdl,
    /// The `data` field of the introspection response, pretty printed
    Json,
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub format: OutputFormat,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: Method::POST,
            headers: HeaderMap::new(),
            format: OutputFormat::default(),
        }
    }
}

/// Parses a `--method` argument, case-insensitively.
pub fn parse_method(method: &str) -> Result<Method, FetchError> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| FetchError::InvalidMethod(method.to_owned()))
}

/// The introspection query sent to servers and executed against local schemas.
pub fn introspection_query() -> String {
    IntrospectionQuery::build(()).query
}

/// Fetches the introspection payload from `source` and renders it.
pub async fn fetch_schema(source: &SchemaSource, options: FetchOptions) -> Result<String, FetchError> {
    let query = introspection_query();

    let payload = match source {
        SchemaSource::Remote(url) => remote::introspect(url, options.method, options.headers, &query).await?,
        SchemaSource::LocalJson(path) => local::read_json(path)?,
        SchemaSource::LocalSdl(path) => local::read_sdl(path, &query)?,
    };

    render(payload, options.format)
}

/// Executes the introspection query against a schema in SDL syntax, returning the response.
pub fn introspect_sdl(sdl: &str) -> Result<serde_json::Value, FetchError> {
    local::introspect_sdl(sdl, "schema.graphql", &introspection_query())
}

/// Renders a GraphQL introspection response.
///
/// A response with errors is a failure whose message is the pretty printed `errors` field. An
/// empty `errors` array counts as no errors.
pub fn render(mut payload: serde_json::Value, format: OutputFormat) -> Result<String, FetchError> {
    if let Some(errors) = payload.get("errors").filter(|errors| has_errors(errors)) {
        return Err(FetchError::Remote(serde_json::to_string_pretty(errors)?));
    }

    let data = match payload.get_mut("data").map(serde_json::Value::take) {
        Some(data) if !data.is_null() => data,
        _ => return Err(FetchError::MissingData),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&data)?),
        OutputFormat::Sdl => sdl::print(data),
    }
}

fn has_errors(errors: &serde_json::Value) -> bool {
    match errors {
        serde_json::Value::Null => false,
        serde_json::Value::Array(errors) => !errors.is_empty(),
        _ => true,
    }
}

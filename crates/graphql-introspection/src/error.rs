use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// returned if the endpoint argument is neither a URL nor a `file:` path
    #[error("could not parse the endpoint '{endpoint}': {source}")]
    InvalidEndpoint { endpoint: String, source: url::ParseError },
    /// returned if the `--method` argument is not a valid HTTP method
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),
    /// returned if a `--header` argument cannot be sent as an HTTP header
    #[error("invalid header '{0}'")]
    InvalidHeader(String),
    /// wraps a transport error from the HTTP client
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    /// returned if the response or the schema file is not valid JSON
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    /// the `errors` field of a GraphQL response, pretty printed
    #[error("{0}")]
    Remote(String),
    /// returned if a response has neither `data` nor `errors`
    #[error("the introspection response did not contain any data")]
    MissingData,
    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),
    #[error("file: protocol only supports reading .json or .graphql (IDL) schemas")]
    UnsupportedFile(PathBuf),
    #[error("could not read '{}'\nCaused by: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    /// returned if a local `.graphql` file does not parse or validate
    #[error("{0}")]
    InvalidSdl(String),
    /// returned if the introspection query could not run against a local schema
    #[error("{0}")]
    LocalIntrospection(String),
    /// returned if the introspection data cannot be turned into a schema
    #[error("could not build a schema from the introspection data: {0}")]
    InvalidSchema(#[from] cynic_introspection::SchemaError),
}

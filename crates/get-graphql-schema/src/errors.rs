use graphql_introspection::FetchError;
use std::{
    io::{self, ErrorKind},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// returned if the async runtime could not be started
    #[error("could not start the async runtime\nCaused by: {0}")]
    Runtime(io::Error),
    /// wraps an error originating in the graphql-introspection crate
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// returned if the schema could not be written to the `--output` path
    #[error("{source}")]
    WriteOutput { path: PathBuf, source: io::Error },
}

impl CliError {
    /// fetch and write failures are warnings, only a failure to run at all is an error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Runtime(_) => 1,
            Self::Fetch(_) | Self::WriteOutput { .. } => 0,
        }
    }

    /// returns the appropriate hint for a [`CliError`]
    pub fn to_hint(&self) -> Option<String> {
        match self {
            Self::Fetch(FetchError::InvalidEndpoint { .. }) => {
                Some("the endpoint must be a full URL such as 'https://example.com/graphql' or 'file:///path/to/schema.graphql'".to_owned())
            }
            Self::Fetch(FetchError::InvalidHeader(_)) => Some("headers are given as 'KEY=VALUE', e.g. 'X-API-KEY=ABC123'".to_owned()),
            Self::Fetch(FetchError::InvalidJson(_)) => {
                Some("the endpoint did not answer with JSON, make sure it points to a GraphQL API".to_owned())
            }
            Self::WriteOutput { path, source } => match source.kind() {
                ErrorKind::PermissionDenied => Some(format!(
                    "it appears that you do not have sufficient permissions to write '{}', try modifying its permissions",
                    path.display()
                )),
                _ => None,
            },
            _ => None,
        }
    }
}

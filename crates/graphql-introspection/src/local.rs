//! Introspection payloads read from the local file system.
//!
//! A `.json` file already holds an introspection result. A `.graphql` file holds SDL: it gets
//! validated and the introspection query is executed against it in memory, which makes both
//! kinds of files interchangeable with a remote endpoint.

use std::{fs, path::Path};

use apollo_compiler::{introspection, validation::Valid, ExecutableDocument, Schema};

use crate::FetchError;

pub(super) fn read_json(path: &Path) -> Result<serde_json::Value, FetchError> {
    let contents = read(path)?;
    let payload: serde_json::Value = serde_json::from_str(&contents)?;

    // Files saved from a server response are wrapped, files saved with `--json` are not.
    let is_response = payload
        .as_object()
        .is_some_and(|object| object.contains_key("data") || object.contains_key("errors"));

    if is_response {
        Ok(payload)
    } else {
        Ok(serde_json::json!({ "data": payload }))
    }
}

pub(super) fn read_sdl(path: &Path, query: &str) -> Result<serde_json::Value, FetchError> {
    let contents = read(path)?;

    introspect_sdl(contents, path, query)
}

pub(super) fn introspect_sdl(
    sdl: impl Into<String>,
    path: impl AsRef<Path>,
    query: &str,
) -> Result<serde_json::Value, FetchError> {
    let schema = Schema::parse_and_validate(sdl, path).map_err(|err| FetchError::InvalidSdl(err.errors.to_string()))?;

    let document = ExecutableDocument::parse_and_validate(&schema, query, "introspection.graphql")
        .map_err(|err| FetchError::LocalIntrospection(err.errors.to_string()))?;

    let operation = document
        .operations
        .get(None)
        .map_err(|_| FetchError::LocalIntrospection("the introspection query must have exactly one operation".into()))?;

    let response = introspection::partial_execute(
        &schema,
        &schema.implementers_map(),
        &document,
        operation,
        Valid::assume_valid_ref(&Default::default()),
    )
    .map_err(|err| FetchError::LocalIntrospection(err.message().to_string()))?;

    tracing::trace!("executed the introspection query against the local schema");

    Ok(serde_json::to_value(&response)?)
}

fn read(path: &Path) -> Result<String, FetchError> {
    tracing::debug!(path = %path.display(), "reading local schema");

    fs::read_to_string(path).map_err(|source| FetchError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

use std::{fmt, path::PathBuf};

use url::Url;

use crate::FetchError;

/// Where the introspection payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// A GraphQL HTTP endpoint
    Remote(Url),
    /// A `file:` URL pointing to an introspection result
    LocalJson(PathBuf),
    /// A `file:` URL pointing to a schema in SDL syntax
    LocalSdl(PathBuf),
}

impl SchemaSource {
    /// Resolves an endpoint argument.
    ///
    /// Local files must exist, and only `.json` and `.graphql` extensions are supported.
    /// `file:schema.json` is relative to the current directory, `file:///schema.json` is absolute.
    pub fn parse(endpoint: &str) -> Result<Self, FetchError> {
        if let Some(path) = endpoint.strip_prefix("file:").filter(|path| !path.starts_with("//")) {
            return Self::local(PathBuf::from(path));
        }

        let url = Url::parse(endpoint).map_err(|source| FetchError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            source,
        })?;

        if url.scheme() != "file" {
            return Ok(Self::Remote(url));
        }

        // `file://host/path` cannot be turned into a local path, keep the path part
        let path = url.to_file_path().unwrap_or_else(|()| PathBuf::from(url.path()));

        Self::local(path)
    }

    fn local(path: PathBuf) -> Result<Self, FetchError> {
        if !path.exists() {
            return Err(FetchError::MissingFile(path));
        }

        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Ok(Self::LocalJson(path)),
            Some("graphql") => Ok(Self::LocalSdl(path)),
            _ => Err(FetchError::UnsupportedFile(path)),
        }
    }
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Remote(url) => write!(f, "{url}"),
            SchemaSource::LocalJson(path) | SchemaSource::LocalSdl(path) => write!(f, "{}", path.display()),
        }
    }
}

use std::{io::IsTerminal, path::PathBuf};

use clap::{ArgAction, Parser};
use graphql_introspection::OutputFormat;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::{LogLevel, LogStyle};

/// Fetch and print the GraphQL schema from a GraphQL HTTP endpoint
/// (outputs the schema in IDL syntax by default).
///
/// If ENDPOINT_URL has the file: protocol, it should point to a local schema
/// in .json (introspection result) or .graphql (IDL) syntax.
#[derive(Debug, Parser)]
#[command(
    name = "get-graphql-schema",
    version,
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = "Example:\n  $ get-graphql-schema https://example.com/graphql > schema.graphql"
)]
pub(crate) struct Args {
    /// The GraphQL endpoint, or a file: URL to a .json or .graphql schema
    #[arg(value_name = "ENDPOINT_URL")]
    pub endpoint: Option<String>,
    /// Add a custom header (ex. 'X-API-KEY=ABC123'), can be used multiple times
    #[arg(short = 'h', long = "header", value_name = "KEY=VALUE")]
    pub headers: Vec<String>,
    /// Output in JSON format (based on introspection query)
    #[arg(short, long)]
    pub json: bool,
    /// HTTP method used for the introspection request (GET, POST, PUT, DELETE...)
    #[arg(short, long, default_value = "POST")]
    pub method: String,
    /// Save the schema to a file instead of printing it
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Set the logging level, logs are written to stderr
    #[arg(long = "log", env = "GET_GRAPHQL_SCHEMA_LOG", default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, env = "GET_GRAPHQL_SCHEMA_LOG_STYLE", default_value_t = LogStyle::Text)]
    log_style: LogStyle,
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Sdl
        }
    }

    pub fn log_format<S>(&self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        // stdout carries the schema
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if std::io::stderr().is_terminal() => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, CommandFactory};

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("get-graphql-schema").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&["https://example.com/graphql"]);

        assert_eq!(args.endpoint.as_deref(), Some("https://example.com/graphql"));
        assert!(args.headers.is_empty());
        assert_eq!(args.format(), OutputFormat::Sdl);
        assert_eq!(args.method, "POST");
        assert_eq!(args.output, None);
    }

    #[test]
    fn endpoint_is_optional() {
        assert_eq!(parse(&[]).endpoint, None);
    }

    #[test]
    fn repeated_headers() {
        let args = parse(&[
            "-h",
            "X-API-KEY=ABC123",
            "--header",
            "Authorization=Bearer a=b",
            "https://example.com/graphql",
        ]);

        assert_eq!(args.headers, ["X-API-KEY=ABC123", "Authorization=Bearer a=b"]);
    }

    #[test]
    fn short_flags() {
        let args = parse(&["-j", "-m", "GET", "--output", "schema.json", "https://example.com/graphql"]);

        assert_eq!(args.format(), OutputFormat::Json);
        assert_eq!(args.method, "GET");
        assert_eq!(args.output, Some(PathBuf::from("schema.json")));
    }

    #[test]
    fn version_flag() {
        let error = Args::try_parse_from(["get-graphql-schema", "-v"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn help_flag() {
        let error = Args::try_parse_from(["get-graphql-schema", "--help"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
    }
}

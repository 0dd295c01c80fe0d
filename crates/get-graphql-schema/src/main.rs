#![cfg_attr(test, allow(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod args;
mod errors;
mod logging;
mod output;
mod watercolor;

use std::process;

use args::Args;
use clap::{crate_version, Parser};
use errors::CliError;
use graphql_introspection::{header_map, parse_headers, parse_method, FetchOptions, SchemaSource};
use mimalloc::MiMalloc;
use output::{
    file::{print_to_file, LocalFilesystem},
    report,
};
use tokio::runtime;
use watercolor::ShouldColorize;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let args = Args::parse();
    ShouldColorize::from_env();

    logging::init(&args);
    tracing::debug!("get-graphql-schema {}", crate_version!());

    if rustls::crypto::ring::default_provider().install_default().is_err() {
        tracing::debug!("a crypto provider was already installed");
    }

    let exit_code = match try_main(args) {
        Ok(()) => 0,
        Err(error) => {
            report::error(&error);
            error.exit_code()
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<(), CliError> {
    let Some(endpoint) = args.endpoint.as_deref() else {
        report::no_endpoint();
        return Ok(());
    };

    let headers = parse_headers(args.headers.iter().map(String::as_str));

    let options = FetchOptions {
        method: parse_method(&args.method)?,
        headers: header_map(&headers)?,
        format: args.format(),
    };

    let source = SchemaSource::parse(endpoint)?;
    tracing::debug!(%source, "resolved the schema source");

    let runtime = runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let schema = runtime.block_on(graphql_introspection::fetch_schema(&source, options))?;

    match args.output {
        Some(ref path) => {
            let path = print_to_file(&LocalFilesystem, path, &schema)?;
            report::schema_saved(&path);
        }
        None => report::schema(&schema),
    }

    Ok(())
}

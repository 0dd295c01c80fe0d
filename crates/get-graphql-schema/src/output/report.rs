use crate::{errors::CliError, watercolor};
use std::{io::Write, path::Path};

/// reports to stderr that no endpoint was given
pub fn no_endpoint() {
    watercolor::output_error!("No endpoint provided", @BrightYellow);
    eprintln!("Usage: get-graphql-schema ENDPOINT_URL > schema.graphql");
}

/// writes the schema to stdout, newline terminated
pub fn schema(schema: &str) {
    let mut stdout = std::io::stdout().lock();

    let result = if schema.ends_with('\n') {
        stdout.write_all(schema.as_bytes())
    } else {
        writeln!(stdout, "{schema}")
    };

    // stdout may be a closed pipe, e.g. `| head`
    if let Err(error) = result.and_then(|()| stdout.flush()) {
        tracing::debug!("could not write the schema to stdout: {error}");
    }
}

/// reports to stderr that the schema was written to a file, stdout stays empty
pub fn schema_saved(path: &Path) {
    watercolor::output_error!("✨ Schema saved to {}", path.display(), @BrightBlue);
}

/// reports an error to stderr
pub fn error(error: &CliError) {
    watercolor::output_error!("{error}", @BrightYellow);
    if let Some(hint) = error.to_hint() {
        watercolor::output_error!("Hint: {hint}", @BrightBlue);
    }
}

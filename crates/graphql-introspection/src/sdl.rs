//! SDL printing for introspection data.
//!
//! The types come from `cynic_introspection`'s printer. Directive definitions are printed here,
//! between the `schema` block and the types.

use std::{collections::HashSet, fmt};

use cynic_introspection::{Directive, DirectiveLocation, InputValue, IntrospectionQuery};
use serde_json::Value;

use crate::FetchError;

const BUILTIN_DIRECTIVES: &[&str] = &["skip", "include", "deprecated", "specifiedBy", "oneOf"];

/// Prints the `data` field of an introspection response as SDL, without trailing whitespace.
pub(crate) fn print(data: Value) -> Result<String, FetchError> {
    let repeatable = repeatable_directives(&data);
    let schema = serde_json::from_value::<IntrospectionQuery>(data)?.into_schema()?;

    let sdl = schema.to_sdl();
    let (schema_definition, types) = split_schema_definition(&sdl);

    let mut blocks = vec![schema_definition.trim().to_owned()];

    blocks.extend(
        schema
            .directives
            .iter()
            .filter(|directive| !BUILTIN_DIRECTIVES.contains(&directive.name.as_str()))
            .map(|directive| {
                DirectiveDefinition {
                    directive,
                    repeatable: repeatable.contains(&directive.name),
                }
                .to_string()
            }),
    );

    blocks.push(types.trim().to_owned());
    blocks.retain(|block| !block.is_empty());

    Ok(blocks.join("\n\n"))
}

/// `isRepeatable` is not part of the parsed introspection types, so it is read from the raw payload.
fn repeatable_directives(data: &Value) -> HashSet<String> {
    data.pointer("/__schema/directives")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|directive| directive.get("isRepeatable").and_then(Value::as_bool) == Some(true))
        .filter_map(|directive| directive.get("name").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

fn split_schema_definition(sdl: &str) -> (&str, &str) {
    if !sdl.starts_with("schema {") {
        return ("", sdl);
    }

    match sdl.find("\n}\n") {
        Some(end) => sdl.split_at(end + 3),
        None => ("", sdl),
    }
}

struct DirectiveDefinition<'a> {
    directive: &'a Directive,
    repeatable: bool,
}

impl fmt::Display for DirectiveDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directive = self.directive;

        write_description(f, directive.description.as_deref(), "")?;
        write!(f, "directive @{}", directive.name)?;

        if directive.args.iter().any(|arg| arg.description.is_some()) {
            f.write_str("(\n")?;

            for arg in &directive.args {
                write_description(f, arg.description.as_deref(), "  ")?;
                f.write_str("  ")?;
                write_input_value(f, arg)?;
                f.write_str("\n")?;
            }

            f.write_str(")")?;
        } else if !directive.args.is_empty() {
            f.write_str("(")?;

            let mut args = directive.args.iter().peekable();

            while let Some(arg) = args.next() {
                write_input_value(f, arg)?;

                if args.peek().is_some() {
                    f.write_str(", ")?;
                }
            }

            f.write_str(")")?;
        }

        if self.repeatable {
            f.write_str(" repeatable")?;
        }

        f.write_str(" on ")?;

        let mut locations = directive.locations.iter().peekable();

        while let Some(location) = locations.next() {
            f.write_str(location_name(*location))?;

            if locations.peek().is_some() {
                f.write_str(" | ")?;
            }
        }

        Ok(())
    }
}

fn write_description(f: &mut fmt::Formatter<'_>, description: Option<&str>, indentation: &str) -> fmt::Result {
    let Some(description) = description else {
        return Ok(());
    };

    writeln!(f, r#"{indentation}""""#)?;

    for line in description.lines() {
        writeln!(f, "{indentation}{line}")?;
    }

    writeln!(f, r#"{indentation}""""#)
}

fn write_input_value(f: &mut fmt::Formatter<'_>, value: &InputValue) -> fmt::Result {
    write!(f, "{}: {}", value.name, value.ty)?;

    if let Some(default_value) = &value.default_value {
        write!(f, " = {default_value}")?;
    }

    Ok(())
}

fn location_name(location: DirectiveLocation) -> &'static str {
    match location {
        DirectiveLocation::Query => "QUERY",
        DirectiveLocation::Mutation => "MUTATION",
        DirectiveLocation::Subscription => "SUBSCRIPTION",
        DirectiveLocation::Field => "FIELD",
        DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
        DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
        DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
        DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
        DirectiveLocation::Schema => "SCHEMA",
        DirectiveLocation::Scalar => "SCALAR",
        DirectiveLocation::Object => "OBJECT",
        DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
        DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
        DirectiveLocation::Interface => "INTERFACE",
        DirectiveLocation::Union => "UNION",
        DirectiveLocation::Enum => "ENUM",
        DirectiveLocation::EnumValue => "ENUM_VALUE",
        DirectiveLocation::InputObject => "INPUT_OBJECT",
        DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
    }
}

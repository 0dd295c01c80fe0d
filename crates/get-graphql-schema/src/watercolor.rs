pub use colored;
pub use colored::control::ShouldColorize;

/// an ergonomic macro for coloring strings in a terminal environment
///
/// ```ignore
/// use watercolor::{watercolor, ShouldColorize};
///
/// ShouldColorize::from_env();
///
/// let path = "schema.graphql";
/// watercolor!("saved to {path}", @BrightBlue);
/// watercolor!("saved to {}", path, @BrightBlue);
/// ```
macro_rules! watercolor {
    ($fmt:expr, $($args:expr,)* @$color:ident$(,)?) => {{
        use $crate::watercolor::colored::Colorize;
        format!($fmt, $($args,)*).color($crate::watercolor::colored::Color::$color)
    }};
}

/// a macro calling [`watercolor`] and then [`eprintln`]
macro_rules! output_error {
    ($($args:tt)*) => {{
       let colored_string = $crate::watercolor::watercolor!($($args)*);
       std::eprintln!("{}", colored_string);
    }};
}

pub(crate) use output_error;
pub(crate) use watercolor;

//! # parsercfc-core
//!
//! Textual recognizer for C function definitions, including ones
//! synthesized by function-like macros (`DEFINE_SYSCALL`-style patterns and
//! similar). No preprocessing: the source is read once and scanned
//! directly, character by character, without expanding `#include`s or
//! running a real preprocessor.
//!
//! ## Quick start
//!
//! ```rust
//! use parsercfc_core::scan_text;
//!
//! let source = "int main(void) {\n    return 0;\n}\n";
//! let result = scan_text(source, None);
//! assert_eq!(result, vec!["main".to_string()]);
//! ```
//!
//! ## Macro-synthesized definitions
//!
//! ```rust
//! use parsercfc_core::scan_text;
//!
//! let source = "#define DEFINE_FN(name) int name(void) {\nDEFINE_FN(init)\n    return 0;\n}\n";
//! let result = scan_text(source, None);
//! assert_eq!(result, vec!["init".to_string()]);
//! ```

pub mod invoke;
pub mod keywords;
pub mod macros;
pub mod merge;
pub mod model;
pub mod scanner;
pub mod skip;
pub mod token;

pub use macros::parse_macros;
pub use merge::merge;
pub use model::{FileResult, MacroDef, MacroTable, Template, TemplatePart, Token};
pub use scanner::{scan, ScanOutput};

/// Scan one file's text end to end: classify its macros, run the
/// definition scanner, and optionally reconcile with a collaborator
/// parser's name list.
///
/// Returns the merged, source-ordered list of function names. Pass `None`
/// for `parser_names` to rely on the textual scanner alone.
pub fn scan_text(text: &str, parser_names: Option<&[String]>) -> Vec<String> {
    let macros = parse_macros(text);
    let output = scan(text, &macros);
    match parser_names {
        Some(names) => merge::merge(
            &output.ordered_defs,
            &output.template_defs,
            &output.expansion_defs,
            &output.used_macros,
            names,
        ),
        None => output.ordered_defs,
    }
}

/// Scan one file, producing the full [`FileResult`] keyed by `path`.
pub fn scan_file(path: impl Into<String>, text: &str, parser_names: Option<&[String]>) -> FileResult {
    let mut result = FileResult::new(path);
    result.fc = scan_text(text, parser_names);
    result
}

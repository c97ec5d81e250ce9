//! Macro-Invocation Matcher (§4.4): locates calls to a specific
//! function-like macro in arbitrary text and renders the name a
//! name-template or identifier-expansion macro would produce.

use crate::keywords::is_acceptable_name;
use crate::model::{render_template, Template};
use crate::skip::{parse_arg_list, skip_block_comment, skip_line_comment, skip_preprocessor_line, skip_string_or_char};
use std::collections::HashMap;

/// One matched call to a macro whose argument count matched its arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Index of the macro name's first character.
    pub start: usize,
    /// Index immediately after the closing `)`.
    pub end: usize,
    pub args: Vec<String>,
}

/// Find every call-shaped occurrence of `macro_name` in `text` whose
/// argument count equals `param_count`. Skips preprocessor lines, comments,
/// and string/char literals while scanning; arity mismatches are silently
/// dropped rather than reported.
pub fn find_invocations(text: &str, macro_name: &str, param_count: usize) -> Vec<Invocation> {
    let chars: Vec<char> = text.chars().collect();
    let name_chars: Vec<char> = macro_name.chars().collect();
    let n = chars.len();
    let mut i = 0;
    let mut at_line_start = true;
    let mut result = Vec::new();

    while i < n {
        let c = chars[i];

        if at_line_start {
            let mut j = i;
            while j < n && (chars[j] == ' ' || chars[j] == '\t') {
                j += 1;
            }
            if j < n && chars[j] == '#' {
                i = skip_preprocessor_line(&chars, j);
                continue;
            }
        }

        if c == '\n' {
            at_line_start = true;
            i += 1;
            continue;
        }
        at_line_start = false;

        if c == '/' && i + 1 < n && chars[i + 1] == '/' {
            i = skip_line_comment(&chars, i);
            continue;
        }
        if c == '/' && i + 1 < n && chars[i + 1] == '*' {
            i = skip_block_comment(&chars, i);
            continue;
        }
        if c == '"' || c == '\'' {
            i = skip_string_or_char(&chars, i);
            continue;
        }

        if c == '_' || c.is_ascii_alphabetic() {
            let start = i;
            let mut j = i + 1;
            while j < n && (chars[j] == '_' || chars[j].is_ascii_alphanumeric()) {
                j += 1;
            }
            if chars[start..j] == name_chars[..] {
                let mut k = j;
                while k < n && (chars[k] == ' ' || chars[k] == '\t' || chars[k] == '\n') {
                    k += 1;
                }
                if k < n && chars[k] == '(' {
                    if let Some((args, end)) = parse_arg_list(&chars, k) {
                        if args.len() == param_count {
                            result.push(Invocation { start, end, args });
                        }
                        i = end;
                        continue;
                    }
                }
            }
            i = j;
            continue;
        }

        i += 1;
    }

    result
}

/// Remove *all* whitespace from a raw argument string, not just leading and
/// trailing.
pub fn normalize_argument(arg: &str) -> String {
    arg.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Map formal parameter names to normalized argument values. Omitted
/// positions (argument list shorter than the parameter list) substitute to
/// the empty string.
pub fn build_arg_map(params: &[String], args: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(params.len());
    for (idx, param) in params.iter().enumerate() {
        let value = args
            .get(idx)
            .map(|a| normalize_argument(a))
            .unwrap_or_default();
        map.insert(param.clone(), value);
    }
    map
}

/// Render `template` against `arg_map` and accept the result only if it is
/// a well-formed, non-keyword identifier.
pub fn render_name(template: &Template, arg_map: &HashMap<String, String>) -> Option<String> {
    let rendered = render_template(template, arg_map);
    if is_acceptable_name(&rendered) {
        Some(rendered)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplatePart;

    #[test]
    fn finds_single_invocation() {
        let hits = find_invocations("DEFINE_FN(init)", "DEFINE_FN", 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].args, vec!["init"]);
    }

    #[test]
    fn arity_mismatch_is_dropped() {
        let hits = find_invocations("DEFINE_FN(a, b)", "DEFINE_FN", 1);
        assert!(hits.is_empty());
    }

    #[test]
    fn does_not_match_longer_identifier() {
        let hits = find_invocations("DEFINE_FN_EX(a)", "DEFINE_FN", 1);
        assert!(hits.is_empty());
    }

    #[test]
    fn ignores_occurrence_inside_comment() {
        let hits = find_invocations("// DEFINE_FN(x)\nreal", "DEFINE_FN", 1);
        assert!(hits.is_empty());
    }

    #[test]
    fn ignores_occurrence_on_preprocessor_line() {
        let hits = find_invocations("#define DEFINE_FN(x) x\nDEFINE_FN(y)", "DEFINE_FN", 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].args, vec!["y"]);
    }

    #[test]
    fn normalizes_whitespace_out_of_arguments() {
        assert_eq!(normalize_argument(" foo \t bar "), "foobar");
    }

    #[test]
    fn builds_arg_map_with_defaults() {
        let params = vec!["a".to_string(), "b".to_string()];
        let args = vec!["x".to_string()];
        let map = build_arg_map(&params, &args);
        assert_eq!(map.get("a"), Some(&"x".to_string()));
        assert_eq!(map.get("b"), Some(&"".to_string()));
    }

    #[test]
    fn renders_and_rejects_keyword_result() {
        let template = vec![TemplatePart::Lit("int".to_string())];
        let map = HashMap::new();
        assert_eq!(render_name(&template, &map), None);
    }

    #[test]
    fn renders_accepted_name() {
        let template = vec![
            TemplatePart::Param("prefix".to_string()),
            TemplatePart::Lit("_init".to_string()),
        ];
        let mut map = HashMap::new();
        map.insert("prefix".to_string(), "net".to_string());
        assert_eq!(render_name(&template, &map), Some("net_init".to_string()));
    }
}

//! Definition Scanner (§4.5): the core single left-to-right pass over a
//! translation unit that recognizes function definitions, including those
//! synthesized by function-like macros.

use crate::invoke::{build_arg_map, render_name};
use crate::keywords::{CONTROL_KEYWORDS, DECLARATION_KEYWORDS};
use crate::model::MacroTable;
use crate::skip::{parse_arg_list, skip_block_comment, skip_line_comment, skip_preprocessor_line, skip_string_or_char};
use std::collections::HashSet;

/// Result of one scanning pass: the definitions in source order, the
/// subsets contributed by each macro category, and the macro names that
/// were used to synthesize a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Every emitted definition name, in the order it was recognized.
    pub ordered_defs: Vec<String>,
    /// Names emitted immediately by a name-template macro invocation.
    pub template_defs: Vec<String>,
    /// Names emitted at `{` because the pending candidate came from an
    /// identifier-expansion macro.
    pub expansion_defs: Vec<String>,
    /// Macro names that contributed at least one emitted definition.
    pub used_macros: HashSet<String>,
}

#[derive(Default)]
struct Candidate {
    name: Option<String>,
    macro_name: Option<String>,
}

impl Candidate {
    fn clear(&mut self) {
        self.name = None;
        self.macro_name = None;
    }

    fn take(&mut self) -> Candidate {
        Candidate {
            name: self.name.take(),
            macro_name: self.macro_name.take(),
        }
    }
}

fn skip_blank(chars: &[char], mut i: usize) -> usize {
    let n = chars.len();
    while i < n && (chars[i] == ' ' || chars[i] == '\t' || chars[i] == '\n') {
        i += 1;
    }
    i
}

/// Run the scanner over `text` using macros already classified for this
/// file. Pure function: no shared state, no I/O.
pub fn scan(text: &str, macros: &MacroTable) -> ScanOutput {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut i = 0;

    let mut brace_depth: usize = 0;
    let mut paren_depth: usize = 0;
    let mut bracket_depth: usize = 0;
    let mut at_line_start = true;

    let mut last_identifier = Candidate::default();
    let mut paren_candidate = Candidate::default();
    let mut pending_name = Candidate::default();

    let mut out = ScanOutput::default();

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
        if c == '\'' || c == '"' {
            i = skip_string_or_char(&chars, i);
            continue;
        }

        if c == '_' || c.is_ascii_alphabetic() {
            let start = i;
            let mut j = i + 1;
            while j < n && (chars[j] == '_' || chars[j].is_ascii_alphanumeric()) {
                j += 1;
            }
            let ident: String = chars[start..j].iter().collect();
            i = j;
            let top_level = paren_depth == 0 && bracket_depth == 0 && brace_depth == 0;

            if CONTROL_KEYWORDS.contains(ident.as_str()) {
                last_identifier.clear();
                continue;
            }

            if DECLARATION_KEYWORDS.contains(ident.as_str()) {
                last_identifier.clear();
                if top_level {
                    paren_candidate.clear();
                    pending_name.clear();
                }
                continue;
            }

            if let Some(def) = macros.get(&ident) {
                if def.name_parts.is_some() && brace_depth == 0 {
                    let k = skip_blank(&chars, i);
                    if chars.get(k) == Some(&'(') {
                        if let Some((args, end)) = parse_arg_list(&chars, k) {
                            if args.len() == def.arity() {
                                let arg_map = build_arg_map(&def.params, &args);
                                if let Some(name) = render_name(def.name_parts.as_ref().unwrap(), &arg_map) {
                                    out.ordered_defs.push(name.clone());
                                    out.template_defs.push(name);
                                    out.used_macros.insert(ident.clone());
                                }
                                i = end;
                                continue;
                            }
                        }
                    }
                } else if let Some(expansion) = &def.expansion_parts {
                    let k = skip_blank(&chars, i);
                    if chars.get(k) == Some(&'(') {
                        if let Some((args, end)) = parse_arg_list(&chars, k) {
                            if args.len() == def.arity() {
                                let arg_map = build_arg_map(&def.params, &args);
                                match render_name(expansion, &arg_map) {
                                    Some(name) => {
                                        last_identifier.name = Some(name);
                                        last_identifier.macro_name = Some(ident.clone());
                                    }
                                    None => last_identifier.clear(),
                                }
                                i = end;
                                continue;
                            }
                        }
                    }
                }
            }

            last_identifier.name = Some(ident);
            last_identifier.macro_name = None;
            continue;
        }

        match c {
            '(' => {
                if paren_depth == 0 && pending_name.name.is_none() {
                    paren_candidate.name = last_identifier.name.clone();
                    paren_candidate.macro_name = last_identifier.macro_name.clone();
                }
                paren_depth += 1;
            }
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                if paren_depth == 0 && pending_name.name.is_none() && paren_candidate.name.is_some() {
                    pending_name = paren_candidate.take();
                }
            }
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '{' => {
                if paren_depth == 0 && bracket_depth == 0 && brace_depth == 0 {
                    if let Some(name) = pending_name.name.take() {
                        out.ordered_defs.push(name.clone());
                        if let Some(macro_name) = pending_name.macro_name.take() {
                            out.expansion_defs.push(name);
                            out.used_macros.insert(macro_name);
                        }
                    }
                }
                last_identifier.clear();
                paren_candidate.clear();
                pending_name.clear();
                brace_depth += 1;
            }
            '}' => {
                brace_depth = brace_depth.saturating_sub(1);
            }
            ';' | ',' | '=' => {
                if paren_depth == 0 && bracket_depth == 0 && brace_depth == 0 {
                    last_identifier.clear();
                    paren_candidate.clear();
                    pending_name.clear();
                }
            }
            _ => {}
        }

        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::parse_macros;

    fn empty_table() -> MacroTable {
        MacroTable::new()
    }

    #[test]
    fn plain_function_definition() {
        let out = scan("int main(void) {\n    return 0;\n}\n", &empty_table());
        assert_eq!(out.ordered_defs, vec!["main".to_string()]);
    }

    #[test]
    fn declaration_is_not_a_definition() {
        let out = scan("int forward_decl(void);\n", &empty_table());
        assert!(out.ordered_defs.is_empty());
    }

    #[test]
    fn multiple_top_level_functions() {
        let out = scan(
            "static int helper(int x) {\n    return x;\n}\n\nint main(void) {\n    return helper(1);\n}\n",
            &empty_table(),
        );
        assert_eq!(
            out.ordered_defs,
            vec!["helper".to_string(), "main".to_string()]
        );
    }

    #[test]
    fn control_keyword_is_not_captured() {
        let out = scan("int main(void) {\n    if (1) {\n        return 1;\n    }\n    return 0;\n}\n", &empty_table());
        assert_eq!(out.ordered_defs, vec!["main".to_string()]);
    }

    #[test]
    fn name_template_macro_emits_immediately() {
        let macros = parse_macros("#define DEFINE_FN(name) int name(void) {\n");
        let out = scan("DEFINE_FN(init)\n    return 0;\n}\n", &macros);
        assert_eq!(out.ordered_defs, vec!["init".to_string()]);
        assert_eq!(out.template_defs, vec!["init".to_string()]);
        assert!(out.used_macros.contains("DEFINE_FN"));
    }

    #[test]
    fn expansion_macro_defers_emission_to_brace() {
        let macros = parse_macros("#define NAME(a, b) a##_##b\n");
        let out = scan("int NAME(foo, bar)(void) {\n    return 0;\n}\n", &macros);
        assert_eq!(out.ordered_defs, vec!["foo_bar".to_string()]);
        assert_eq!(out.expansion_defs, vec!["foo_bar".to_string()]);
        assert!(out.used_macros.contains("NAME"));
    }

    #[test]
    fn function_pointer_typedef_is_not_a_definition() {
        let out = scan("typedef int (*callback)(int);\n", &empty_table());
        assert!(out.ordered_defs.is_empty());
    }

    #[test]
    fn expansion_rendering_a_keyword_is_rejected_without_leaking_the_macro_name() {
        let macros = parse_macros("#define N(x) x\n");
        let out = scan("void N(int)(void) { }\n", &macros);
        assert!(out.ordered_defs.is_empty());
    }

    #[test]
    fn nested_braces_do_not_confuse_the_outer_definition() {
        let out = scan(
            "int main(void) {\n    for (int i = 0; i < 1; i++) {\n        do_thing();\n    }\n    return 0;\n}\n",
            &empty_table(),
        );
        assert_eq!(out.ordered_defs, vec!["main".to_string()]);
    }

    #[test]
    fn comments_and_strings_do_not_trigger_false_positives() {
        let out = scan(
            "/* int fake(void) { */\nint real(void) {\n    const char *s = \"int x(void) {\";\n    return 0;\n}\n",
            &empty_table(),
        );
        assert_eq!(out.ordered_defs, vec!["real".to_string()]);
    }
}

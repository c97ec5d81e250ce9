//! The macro model (§4.2): recognizing `#define` lines and classifying each
//! function-like macro as a name-template, an identifier-expansion, or
//! neither.
//!
//! Object-like macros (no parameter list) are intentionally not tracked —
//! they cannot synthesize a function definition and the scanner never
//! consults them.

use crate::model::{MacroDef, MacroTable, Template, TemplatePart, Token};
use crate::token::tokenize;
use regex::Regex;
use std::sync::LazyLock;

static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*#[ \t]*define[ \t]+([A-Za-z_][A-Za-z0-9_]*)\(([^)]*)\)(.*)$").unwrap()
});

/// Join `\`-continued physical lines into logical lines, stripping the
/// continuation markers.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(stripped) = line.strip_suffix('\\') {
            current.push_str(stripped);
        } else {
            current.push_str(line);
            lines.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_params(params: &str) -> Vec<String> {
    if params.trim().is_empty() {
        return Vec::new();
    }
    params
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn part_for(ident: &str, params: &[String]) -> TemplatePart {
    if params.iter().any(|p| p == ident) {
        TemplatePart::Param(ident.to_string())
    } else {
        TemplatePart::Lit(ident.to_string())
    }
}

/// Walk a tokenized macro body looking for a function-header-shaped
/// expansion: `name_parts(` ... `)` `{`, per §4.2.
fn classify_name_parts(tokens: &[Token], params: &[String]) -> Option<Template> {
    let mut last_parts: Option<Template> = None;
    let mut paren_candidate: Option<Template> = None;
    let mut pending_parts: Option<Template> = None;
    let mut pending_paste = false;
    let mut paren_depth: usize = 0;
    let mut bracket_depth: usize = 0;

    for tok in tokens {
        match tok {
            Token::Ident(ident) => {
                let parts = vec![part_for(ident, params)];
                last_parts = match (pending_paste, last_parts.take()) {
                    (true, Some(mut existing)) => {
                        existing.extend(parts);
                        Some(existing)
                    }
                    _ => Some(parts),
                };
                pending_paste = false;
            }
            Token::Paste => {
                if last_parts.is_some() {
                    pending_paste = true;
                }
            }
            Token::Punct('(') => {
                if paren_depth == 0 && pending_parts.is_none() {
                    paren_candidate = last_parts.clone();
                }
                paren_depth += 1;
            }
            Token::Punct(')') => {
                paren_depth = paren_depth.saturating_sub(1);
                if paren_depth == 0 && pending_parts.is_none() && paren_candidate.is_some() {
                    pending_parts = paren_candidate.clone();
                }
            }
            Token::Punct('[') => bracket_depth += 1,
            Token::Punct(']') => bracket_depth = bracket_depth.saturating_sub(1),
            Token::Punct('{') => {
                if paren_depth == 0 && bracket_depth == 0 {
                    if let Some(parts) = pending_parts {
                        return Some(parts);
                    }
                }
            }
            Token::Punct(',') | Token::Punct(';') | Token::Punct('=') => {
                if paren_depth == 0 && bracket_depth == 0 {
                    last_parts = None;
                    paren_candidate = None;
                    pending_parts = None;
                }
            }
            Token::Punct(_) => {}
        }
    }

    None
}

/// A body that is exactly a single identifier chain glued by `##`.
fn classify_expansion(tokens: &[Token], params: &[String]) -> Option<Template> {
    if tokens.is_empty() {
        return None;
    }
    let mut template = Vec::new();
    let mut expect_ident = true;
    for tok in tokens {
        match (tok, expect_ident) {
            (Token::Ident(ident), true) => {
                template.push(part_for(ident, params));
                expect_ident = false;
            }
            (Token::Paste, false) => {
                expect_ident = true;
            }
            _ => return None,
        }
    }
    if expect_ident {
        None
    } else {
        Some(template)
    }
}

/// Scan `text` for `#define` lines and build the macro table for one file.
pub fn parse_macros(text: &str) -> MacroTable {
    let mut table = MacroTable::new();
    for line in logical_lines(text) {
        let Some(caps) = DEFINE_RE.captures(&line) else {
            continue;
        };
        let name = caps[1].to_string();
        let params = split_params(&caps[2]);
        let body = caps[3].to_string();
        let tokens = tokenize(&body);

        let name_parts = classify_name_parts(&tokens, &params);
        let expansion_parts = classify_expansion(&tokens, &params);

        table.insert(MacroDef {
            name,
            params,
            name_parts,
            expansion_parts,
        });
    }
    table
}

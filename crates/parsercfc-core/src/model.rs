//! Data model shared by the macro model, the scanner, and the merger.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One piece of a name template: either a reference to a macro parameter or
/// a literal identifier fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplatePart {
    /// References the macro parameter named here.
    Param(String),
    /// A literal identifier fragment carried through verbatim.
    Lit(String),
}

/// A template is an ordered sequence of parts concatenated together when
/// rendered against a concrete argument list.
pub type Template = Vec<TemplatePart>;

/// One token of a tokenized macro body (§4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(String),
    Paste,
    /// One of `(){}[];,=`.
    Punct(char),
}

/// A classified `#define NAME(params) body` macro.
///
/// At least one of `name_parts` / `expansion_parts` is `Some` for the macro
/// to influence scanning at all; macros that classify as neither are kept
/// in the table (so later re-`#define`s still "win") but are inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDef {
    pub name: String,
    pub params: Vec<String>,
    /// Present when the body contains a function-header-shaped expansion
    /// whose name is built from `params` and/or literals.
    pub name_parts: Option<Template>,
    /// Present when the body is exactly a single identifier chain built
    /// from `params` and/or literals.
    pub expansion_parts: Option<Template>,
}

impl MacroDef {
    /// Whether this macro can influence the definition scanner at all.
    pub fn is_active(&self) -> bool {
        self.name_parts.is_some() || self.expansion_parts.is_some()
    }

    /// Number of formal parameters; callers invoking this macro must supply
    /// exactly this many arguments for substitution to apply.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Mapping from macro name to its definition. Built per-file and discarded
/// at file end. A later `#define` of the same name replaces the earlier
/// one, matching the textual, non-scoped nature of the C preprocessor this
/// tool intentionally does not fully emulate.
#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    macros: HashMap<String, MacroDef>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, def: MacroDef) {
        self.macros.insert(def.name.clone(), def);
    }

    pub fn get(&self, name: &str) -> Option<&MacroDef> {
        self.macros.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Macros that classify as name-template macros, in no particular
    /// order — the scanner looks them up by name as it walks the text.
    pub fn name_template_macros(&self) -> impl Iterator<Item = &MacroDef> {
        self.macros.values().filter(|m| m.name_parts.is_some())
    }

    /// Macros that classify as identifier-expansion macros.
    pub fn expansion_macros(&self) -> impl Iterator<Item = &MacroDef> {
        self.macros.values().filter(|m| m.expansion_parts.is_some())
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

/// The final, per-file scan result: the ordered list of function names
/// (duplicates allowed, order is source order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub path: String,
    pub fc: Vec<String>,
}

impl FileResult {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fc: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fc.is_empty()
    }
}

/// Render a template against a concrete argument map: concatenate every
/// `Param` part's bound value (defaulting to empty when unbound) and every
/// `Lit` part verbatim.
pub fn render_template(template: &Template, args: &HashMap<String, String>) -> String {
    let mut out = String::new();
    for part in template {
        match part {
            TemplatePart::Param(name) => {
                if let Some(value) = args.get(name) {
                    out.push_str(value);
                }
            }
            TemplatePart::Lit(text) => out.push_str(text),
        }
    }
    out
}

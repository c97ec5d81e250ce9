//! Name-List Merger (§4.6): reconciles the scanner's own definition list
//! with an optional external (collaborator) parser's name list.
//!
//! The scanner's `ordered_defs` is already a complete answer on its own;
//! this merge only runs when a collaborator parser's output is available,
//! and exists to fold plain function names the collaborator corroborates
//! back into scanner order while never discarding a name the collaborator
//! found that the scanner's heuristic missed.

use std::collections::HashMap;
use std::collections::HashSet;

/// Reconcile the scanner's definitions with an external parser's name
/// list, preferring the scanner's source order.
///
/// `parser_names` should be the collaborator's raw output for this file;
/// pass an empty slice when no collaborator was consulted — merging
/// against nothing when the scanner alone recognized a macro-synthesized
/// name will still preserve that name via `template_defs`/`expansion_defs`.
pub fn merge(
    ordered_defs: &[String],
    template_defs: &[String],
    expansion_defs: &[String],
    used_macros: &HashSet<String>,
    parser_names: &[String],
) -> Vec<String> {
    let filtered_parser_names: Vec<String> = parser_names
        .iter()
        .filter(|name| !used_macros.contains(name.as_str()))
        .cloned()
        .collect();

    let enumeration: Vec<String> = filtered_parser_names
        .iter()
        .cloned()
        .chain(expansion_defs.iter().cloned())
        .chain(template_defs.iter().cloned())
        .collect();

    let mut counts: HashMap<&str, i64> = HashMap::new();
    for name in &enumeration {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }

    let mut merged = Vec::with_capacity(ordered_defs.len().max(enumeration.len()));

    for name in ordered_defs {
        if let Some(count) = counts.get_mut(name.as_str()) {
            if *count > 0 {
                merged.push(name.clone());
                *count -= 1;
            }
        }
    }

    for name in &enumeration {
        if let Some(count) = counts.get_mut(name.as_str()) {
            if *count > 0 {
                merged.push(name.clone());
                *count -= 1;
            }
        }
    }

    merged
}

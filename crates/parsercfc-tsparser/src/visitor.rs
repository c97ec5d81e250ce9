//! Walks a tree-sitter C syntax tree collecting function definition names.
//!
//! Mirrors the grammar's own tolerance for `ERROR` nodes: we still descend
//! into them looking for whatever valid `function_definition`s the parser
//! managed to recover.

use tree_sitter::Node;

pub fn collect_function_names(source: &[u8], root: Node) -> Vec<String> {
    let mut names = Vec::new();
    visit(root, source, &mut names);
    names
}

fn visit(node: Node, source: &[u8], names: &mut Vec<String>) {
    if node.kind() == "function_definition" {
        if let Some(declarator) = node.child_by_field_name("declarator") {
            if let Some(name) = extract_name(declarator, source) {
                names.push(name);
            }
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, names);
    }
}

/// Dig through `function_declarator`/`pointer_declarator` wrapping to find
/// the bare identifier naming the function, e.g. `int *foo(void)`.
fn extract_name(node: Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "function_declarator" | "pointer_declarator" => node
            .child_by_field_name("declarator")
            .and_then(|child| extract_name(child, source)),
        "identifier" => node.utf8_text(source).ok().map(|s| s.to_string()),
        _ => {
            let mut cursor = node.walk();
            node.children(&mut cursor).find_map(|child| extract_name(child, source))
        }
    }
}

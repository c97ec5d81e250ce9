//! Reserved-identifier tables used by name rendering and the definition
//! scanner.
//!
//! Two distinct sets are needed: the narrow C keyword list that a
//! *rendered* macro-expanded name is checked against (a macro can legally
//! expand to `struct`-shaped text elsewhere, but never to a bare reserved
//! word standing in for a function name), and the broader declaration-
//! keyword set the scanner uses to recognize "this identifier is part of a
//! type/storage/qualifier, not a candidate function name".

use std::collections::HashSet;
use std::sync::LazyLock;

/// C keywords a rendered identifier is rejected for matching (§4.7).
pub static RESERVED_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "auto",
        "break",
        "case",
        "char",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extern",
        "float",
        "for",
        "goto",
        "if",
        "inline",
        "int",
        "long",
        "register",
        "restrict",
        "return",
        "short",
        "signed",
        "sizeof",
        "static",
        "struct",
        "switch",
        "typedef",
        "union",
        "unsigned",
        "void",
        "volatile",
        "while",
        "_Alignas",
        "_Alignof",
        "_Atomic",
        "_Bool",
        "_Complex",
        "_Generic",
        "_Imaginary",
        "_Noreturn",
        "_Static_assert",
        "_Thread_local",
    ]
    .into_iter()
    .collect()
});

/// Keywords that abort a pending function-name candidate no matter where
/// they appear (`if`, `for`, `return`, ...). Distinct from declaration
/// keywords: these clear `last_identifier` but never reset `paren_candidate`
/// or `pending_name` on their own.
pub static CONTROL_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
        "return", "goto", "sizeof",
    ]
    .into_iter()
    .collect()
});

/// Type, storage-class, qualifier, and compiler-extension keywords. At top
/// level (all depths zero) seeing one of these also clears any pending
/// function-name candidate, since it signals the start of a fresh
/// declaration.
pub static DECLARATION_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "auto",
        "break",
        "case",
        "char",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extern",
        "float",
        "for",
        "goto",
        "if",
        "inline",
        "int",
        "long",
        "register",
        "restrict",
        "return",
        "short",
        "signed",
        "sizeof",
        "static",
        "struct",
        "switch",
        "typedef",
        "union",
        "unsigned",
        "void",
        "volatile",
        "while",
        "_Alignas",
        "_Alignof",
        "_Atomic",
        "_Bool",
        "_Complex",
        "_Generic",
        "_Imaginary",
        "_Noreturn",
        "_Static_assert",
        "_Thread_local",
        "__attribute__",
        "__declspec",
        "__asm",
        "asm",
        "__thread",
        "typeof",
        "__typeof__",
        "__const",
        "__volatile__",
        "__restrict",
        "__restrict__",
        "__inline",
        "__inline__",
        "__alignas",
        "__alignas__",
    ]
    .into_iter()
    .collect()
});

/// A well-formed C identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Whether `name` is usable as an emitted function name: a well-formed
/// identifier that is not a reserved keyword.
pub fn is_acceptable_name(name: &str) -> bool {
    is_identifier(name) && !RESERVED_KEYWORDS.contains(name)
}

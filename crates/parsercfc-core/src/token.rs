//! Tokenizer for `#define` macro bodies (§4.1).
//!
//! Converts the body text of a single macro definition (continuations
//! already joined) into the small token stream the macro classifier walks.
//! This is deliberately much narrower than a full C lexer: numeric and
//! floating literals, most operators, and whitespace are simply discarded,
//! since the classifier only cares about identifiers, `##`, and the handful
//! of punctuation characters that shape a function header.

use crate::model::Token;

const PUNCT_CHARS: &[char] = &['(', ')', '{', '}', '[', ']', ';', ',', '='];

/// Tokenize a macro body per the priority-ordered rules in §4.1.
pub fn tokenize(body: &str) -> Vec<Token> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    let n = chars.len();

    while i < n {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '/' && i + 1 < n && chars[i + 1] == '/' {
            while i < n && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        if c == '/' && i + 1 < n && chars[i + 1] == '*' {
            i += 2;
            let mut closed = false;
            while i + 1 < n {
                if chars[i] == '*' && chars[i + 1] == '/' {
                    i += 2;
                    closed = true;
                    break;
                }
                i += 1;
            }
            if !closed {
                break;
            }
            continue;
        }

        if c == '"' || c == '\'' {
            let quote = c;
            i += 1;
            while i < n {
                if chars[i] == '\\' && i + 1 < n {
                    i += 2;
                    continue;
                }
                if chars[i] == quote {
                    i += 1;
                    break;
                }
                i += 1;
            }
            continue;
        }

        if c == '#' && i + 1 < n && chars[i + 1] == '#' {
            tokens.push(Token::Paste);
            i += 2;
            continue;
        }

        if c == '_' || c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < n && (chars[i] == '_' || chars[i].is_ascii_alphanumeric()) {
                i += 1;
            }
            tokens.push(Token::Ident(chars[start..i].iter().collect()));
            continue;
        }

        if PUNCT_CHARS.contains(&c) {
            tokens.push(Token::Punct(c));
            i += 1;
            continue;
        }

        i += 1;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_identifier_chain() {
        let tokens = tokenize("T##_##N");
        assert_eq!(
            tokens,
            vec![
                Token::Ident("T".to_string()),
                Token::Paste,
                Token::Ident("_".to_string()),
                Token::Paste,
                Token::Ident("N".to_string()),
            ]
        );
    }

    #[test]
    fn skips_comments_and_strings() {
        let tokens = tokenize("int /* comment */ foo(\"str\" , 'c')");
        assert_eq!(
            tokens,
            vec![
                Token::Ident("int".to_string()),
                Token::Ident("foo".to_string()),
                Token::Punct('('),
                Token::Punct(','),
                Token::Punct(')'),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_ends_tokenization() {
        let tokens = tokenize("foo /* never closes");
        assert_eq!(tokens, vec![Token::Ident("foo".to_string())]);
    }

    #[test]
    fn function_header_shape() {
        let tokens = tokenize("int T##_##N(T x) { return x; }");
        let idents: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Ident(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(idents, vec!["int", "T", "_", "N", "T", "x", "return", "x"]);
        assert!(tokens.contains(&Token::Punct('{')));
    }

    #[test]
    fn line_comment_runs_to_newline_only() {
        let tokens = tokenize("foo // bar(baz)\nqux");
        assert_eq!(
            tokens,
            vec![Token::Ident("foo".to_string()), Token::Ident("qux".to_string())]
        );
    }
}

use crate::utils::error::{EtlError, Result};

/// Turns the raw declaration text (`const NAME = [ ... ];`) into strict JSON.
///
/// Strips the `const NAME =` prefix and one trailing `;`, then rewrites the
/// JS array literal with a single pass that tracks string boundaries:
/// single-quoted strings become double-quoted (apostrophes in the content are
/// preserved, embedded `"` gets escaped), bare identifier keys are quoted,
/// and trailing commas before `}`/`]` are dropped at any nesting depth.
/// Comments and other JS syntax are not handled and surface as parse errors.
pub fn normalize(decl: &str) -> Result<String> {
    let (_, rhs) = decl
        .split_once('=')
        .ok_or_else(|| EtlError::ProcessingError {
            message: "Declaration block has no '=' assignment".to_string(),
        })?;
    let rhs = rhs.trim();
    let rhs = rhs.strip_suffix(';').unwrap_or(rhs).trim_end();
    Ok(jsonify(rhs))
}

fn jsonify(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    // A comma and the whitespace after it are held back until the next
    // token shows the comma was not trailing.
    let mut held = Hold::default();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                held.flush(&mut out);
                out.push('"');
                copy_string(&mut chars, c, &mut out);
            }
            ',' => {
                held.flush(&mut out);
                held.comma = true;
            }
            '}' | ']' => {
                held.drop_comma(&mut out);
                out.push(c);
            }
            c if c.is_whitespace() => {
                if held.comma {
                    held.ws.push(c);
                } else {
                    out.push(c);
                }
            }
            c if is_ident_start(c) => {
                held.flush(&mut out);
                let word = read_ident(c, &mut chars);
                let ws = skip_whitespace(&mut chars);
                if chars.peek() == Some(&':') {
                    chars.next();
                    out.push('"');
                    out.push_str(&word);
                    out.push_str("\":");
                } else {
                    // bare literal (true, false, null) or stray token
                    out.push_str(&word);
                    out.push_str(&ws);
                }
            }
            other => {
                held.flush(&mut out);
                out.push(other);
            }
        }
    }
    out
}

#[derive(Default)]
struct Hold {
    comma: bool,
    ws: String,
}

impl Hold {
    fn flush(&mut self, out: &mut String) {
        if self.comma {
            out.push(',');
            out.push_str(&self.ws);
            self.comma = false;
            self.ws.clear();
        }
    }

    fn drop_comma(&mut self, out: &mut String) {
        if self.comma {
            out.push_str(&self.ws);
            self.comma = false;
            self.ws.clear();
        }
    }
}

/// Copies a string body up to the closing `delim`, emitting JSON escaping.
/// An unterminated string runs to the end of input and is left for the
/// parser to report.
fn copy_string<I: Iterator<Item = char>>(chars: &mut I, delim: char, out: &mut String) {
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                // \' is a JS escape with no JSON counterpart
                Some('\'') => out.push('\''),
                Some(esc) => {
                    out.push('\\');
                    out.push(esc);
                }
                None => out.push('\\'),
            },
            c if c == delim => {
                out.push('"');
                return;
            }
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn read_ident<I: Iterator<Item = char>>(
    first: char,
    chars: &mut std::iter::Peekable<I>,
) -> String {
    let mut word = String::new();
    word.push(first);
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) {
            word.push(c);
            chars.next();
        } else {
            break;
        }
    }
    word
}

fn skip_whitespace<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> String {
    let mut ws = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            ws.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ws
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_assignment_and_terminator() {
        let json = normalize("const XS = [1, 2];").unwrap();
        assert_eq!(json, "[1, 2]");
    }

    #[test]
    fn missing_assignment_is_an_error() {
        assert!(normalize("[1, 2];").is_err());
    }

    #[test]
    fn converts_single_quoted_strings() {
        let json = normalize("const XS = [{id: 'p1'}];").unwrap();
        assert_eq!(json, r#"[{"id": "p1"}]"#);
    }

    #[test]
    fn quotes_bare_keys_with_spacing() {
        let json = normalize("const XS = [{ id : 'p1', tier:'UNIVERSAL' }];").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], "p1");
        assert_eq!(parsed[0]["tier"], "UNIVERSAL");
    }

    #[test]
    fn preserves_apostrophes_inside_values() {
        let json = normalize("const XS = [{category: 'Nature\\'s Cycle'}];").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["category"], "Nature's Cycle");
    }

    #[test]
    fn unescaped_apostrophe_in_double_quoted_value_survives() {
        let json = normalize(r#"const XS = [{name: "Nature's Cycle"}];"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Nature's Cycle");
    }

    #[test]
    fn escapes_double_quotes_inside_single_quoted_values() {
        let json = normalize(r#"const XS = [{name: 'say "hi"'}];"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], r#"say "hi""#);
    }

    #[test]
    fn drops_trailing_commas_at_every_depth() {
        let json = normalize("const XS = [{id: 'p1', tags: ['a', 'b',],},];").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["tags"][1], "b");
    }

    #[test]
    fn commas_inside_strings_are_untouched() {
        let json = normalize("const XS = [{name: 'a,}', n: 1}];").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "a,}");
        assert_eq!(parsed[0]["n"], 1);
    }

    #[test]
    fn bare_literals_stay_unquoted() {
        let json = normalize("const XS = [{ok: true, missing: null, n: 0.5}];").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["ok"], true);
        assert_eq!(parsed[0]["missing"], serde_json::Value::Null);
    }

    #[test]
    fn multi_line_block_from_the_real_data_shape() {
        let decl = "\
const ALL_PATHWAYS_RAW = [
    { id: 'VALSYN-PWY', name: \"L-valine biosynthesis\", category: 'biosynthesis', subcategory: 'Amino Acids', prevalence: 0.999177801, tier: 'UNIVERSAL' },
    { id: 'PWY-6386', name: \"UDP-N-acetylmuramoyl-pentapeptide biosynthesis II (lysine-containing)\", category: 'biosynthesis', subcategory: 'Amino Acids', prevalence: 0.999177801, tier: 'UNIVERSAL' },
];";
        let json = normalize(decl).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["id"], "PWY-6386");
    }
}

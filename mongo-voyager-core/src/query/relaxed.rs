//! Relaxed query syntax normalization.
//!
//! Users type shell-flavoured queries with unquoted keys
//! (`{status: "active"}`); the driver wants strict JSON. This module quotes
//! bare object keys recursively, splitting only at the top level of each
//! object/array so nested structures and string contents stay untouched.

/// Tracks nesting and string context while scanning.
#[derive(Default)]
struct ScanState {
    brace_level: i32,
    bracket_level: i32,
    in_string: bool,
    escape_next: bool,
}

impl ScanState {
    /// Advance over one character. Returns `true` while inside a string or
    /// an escape sequence (nesting must not be updated there).
    fn step(&mut self, ch: char) -> bool {
        if self.escape_next {
            self.escape_next = false;
            return true;
        }
        match ch {
            '\\' => {
                self.escape_next = true;
                true
            }
            '"' => {
                self.in_string = !self.in_string;
                true
            }
            _ if self.in_string => true,
            '{' => {
                self.brace_level += 1;
                false
            }
            '}' => {
                self.brace_level -= 1;
                false
            }
            '[' => {
                self.bracket_level += 1;
                false
            }
            ']' => {
                self.bracket_level -= 1;
                false
            }
            _ => false,
        }
    }

    fn at_top_level(&self) -> bool {
        self.brace_level == 0 && self.bracket_level == 0 && !self.in_string
    }
}

/// Transform relaxed syntax into JSON-compliant text.
///
/// Objects and arrays are fixed recursively; anything else is returned
/// unchanged.
#[must_use]
pub fn make_json_compliant(text: &str) -> String {
    let text = text.trim();
    if text.starts_with('[') && text.ends_with(']') {
        fix_array(text)
    } else if text.starts_with('{') && text.ends_with('}') {
        fix_object(text)
    } else {
        text.to_string()
    }
}

/// Quote bare keys inside one object literal.
fn fix_object(obj: &str) -> String {
    let inner = obj[1..obj.len() - 1].trim();
    if inner.is_empty() {
        return obj.to_string();
    }

    let pairs = smart_split(inner, ',');
    let fixed: Vec<String> = pairs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(fix_pair)
        .collect();
    format!("{{{}}}", fixed.join(", "))
}

/// Fix every element of an array literal.
fn fix_array(arr: &str) -> String {
    let inner = arr[1..arr.len() - 1].trim();
    if inner.is_empty() {
        return arr.to_string();
    }

    let parts = smart_split(inner, ',');
    let fixed: Vec<String> = parts
        .iter()
        .map(|p| make_json_compliant(p.trim()))
        .collect();
    format!("[{}]", fixed.join(", "))
}

/// Fix one `key: value` pair: quote the key if needed, recurse into the value.
fn fix_pair(pair: &str) -> String {
    let Some(colon) = find_main_colon(pair) else {
        return pair.to_string();
    };
    let key = pair[..colon].trim();
    let value = pair[colon + 1..].trim();
    format!("{}:{}", quote_if_needed(key), make_json_compliant(value))
}

/// Split at `delimiter`, but only at the top level (not inside nested
/// objects, arrays, or strings).
fn smart_split(text: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::default();

    for ch in text.chars() {
        if state.step(ch) {
            current.push(ch);
            continue;
        }
        if ch == delimiter && state.at_top_level() {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Byte position of the key/value colon, ignoring colons nested in values
/// or strings.
fn find_main_colon(text: &str) -> Option<usize> {
    let mut state = ScanState::default();
    for (i, ch) in text.char_indices() {
        if state.step(ch) {
            continue;
        }
        if ch == ':' && state.at_top_level() {
            return Some(i);
        }
    }
    None
}

/// Quote a bare identifier key; already-quoted or non-identifier keys are
/// left alone.
fn quote_if_needed(key: &str) -> String {
    let is_quoted = (key.starts_with('"') && key.ends_with('"'))
        || (key.starts_with('\'') && key.ends_with('\''));
    if is_quoted {
        return key.to_string();
    }
    if is_identifier(key) {
        return format!("\"{key}\"");
    }
    key.to_string()
}

/// Valid JS/JSON identifier: `[a-zA-Z_$][a-zA-Z0-9_$]*`.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_bare_keys() {
        assert_eq!(
            make_json_compliant(r#"{status: "active"}"#),
            r#"{"status":"active"}"#
        );
    }

    #[test]
    fn already_compliant_object_unchanged_in_meaning() {
        let fixed = make_json_compliant(r#"{"status": "active"}"#);
        let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(v["status"], "active");
    }

    #[test]
    fn nested_objects_and_operators() {
        let fixed = make_json_compliant(r#"{age: {$gt: 21}, name: "bob"}"#);
        let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(v["age"]["$gt"], 21);
        assert_eq!(v["name"], "bob");
    }

    #[test]
    fn array_of_stages() {
        let fixed = make_json_compliant(r#"[{$match: {status: "active"}}, {$limit: 5}]"#);
        let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(v[0]["$match"]["status"], "active");
        assert_eq!(v[1]["$limit"], 5);
    }

    #[test]
    fn commas_inside_strings_do_not_split() {
        let fixed = make_json_compliant(r#"{note: "a, b: c", x: 1}"#);
        let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(v["note"], "a, b: c");
        assert_eq!(v["x"], 1);
    }

    #[test]
    fn escaped_quote_inside_string() {
        let fixed = make_json_compliant(r#"{msg: "say \"hi\", ok"}"#);
        let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(v["msg"], r#"say "hi", ok"#);
    }

    #[test]
    fn empty_object_and_array_untouched() {
        assert_eq!(make_json_compliant("{}"), "{}");
        assert_eq!(make_json_compliant("[]"), "[]");
        assert_eq!(make_json_compliant("  {}  "), "{}");
    }

    #[test]
    fn scalar_passes_through() {
        assert_eq!(make_json_compliant("\"active\""), "\"active\"");
        assert_eq!(make_json_compliant("42"), "42");
    }

    #[test]
    fn nested_array_values() {
        let fixed = make_json_compliant(r#"{tags: {$in: ["a", "b"]}}"#);
        let v: serde_json::Value = serde_json::from_str(&fixed).unwrap();
        assert_eq!(v["tags"]["$in"][1], "b");
    }
}

use std::sync::OnceLock;

use regex::Regex;

struct StripRules {
    block_comment: Regex,
    line_comment: Regex,
    double_quoted: Regex,
    single_quoted: Regex,
}

fn strip_rules() -> &'static StripRules {
    static CACHED: OnceLock<StripRules> = OnceLock::new();
    CACHED.get_or_init(|| StripRules {
        block_comment: Regex::new(r"(?s)--\[\[.*?\]\]").expect("block comment regex must compile"),
        line_comment: Regex::new(r"--[^\r\n]*").expect("line comment regex must compile"),
        double_quoted: Regex::new(r#""[^"]*""#).expect("double quote regex must compile"),
        single_quoted: Regex::new(r"'[^']*'").expect("single quote regex must compile"),
    })
}

/// Removes comments and empties string literals so keyword counts only see code.
///
/// Passes run in a fixed order: block comments, line comments, double-quoted
/// strings, single-quoted strings. A quote inside an already-emptied string of
/// the other kind can therefore still pair up with a later quote.
#[must_use]
pub fn strip_comments_and_strings(code: &str) -> String {
    let rules = strip_rules();
    let text = rules.block_comment.replace_all(code, "");
    let text = rules.line_comment.replace_all(&text, "");
    let text = rules.double_quoted.replace_all(&text, "\"\"");
    let text = rules.single_quoted.replace_all(&text, "''");
    text.into_owned()
}

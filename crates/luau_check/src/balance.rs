use std::sync::OnceLock;

use regex::Regex;

use crate::report::Finding;

struct KeywordRules {
    block_opener: Regex,
    end: Regex,
    repeat: Regex,
    until: Regex,
}

fn keyword_rules() -> &'static KeywordRules {
    static CACHED: OnceLock<KeywordRules> = OnceLock::new();
    CACHED.get_or_init(|| KeywordRules {
        // Word boundaries are ASCII-only: `éend` still counts as `end`.
        // `repeat` closes with `until`, never `end`.
        block_opener: Regex::new(r"(?-u:\b)(?:do|function|if|for|while)(?-u:\b)")
            .expect("block opener regex must compile"),
        end: Regex::new(r"(?-u:\b)end(?-u:\b)").expect("end regex must compile"),
        repeat: Regex::new(r"(?-u:\b)repeat(?-u:\b)").expect("repeat regex must compile"),
        until: Regex::new(r"(?-u:\b)until(?-u:\b)").expect("until regex must compile"),
    })
}

/// Raw-text count of each delimiter pair; one finding per unequal pair.
pub(crate) fn delimiter_findings(code: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let (open, close) = count_pair(code, '(', ')');
    if open != close {
        findings.push(Finding::new(format!(
            "Parentheses don't match: {open} opening ( but {close} closing ). Check for a missing ) somewhere."
        )));
    }

    let (open, close) = count_pair(code, '[', ']');
    if open != close {
        findings.push(Finding::new(format!(
            "Square brackets don't match: {open} opening [ but {close} closing ]."
        )));
    }

    let (open, close) = count_pair(code, '{', '}');
    if open != close {
        findings.push(Finding::new(format!(
            "Curly braces don't match: {open} opening {{ but {close} closing }}."
        )));
    }

    findings
}

/// Keyword balance over text that already had comments and strings stripped.
pub(crate) fn block_findings(stripped: &str) -> Vec<Finding> {
    let rules = keyword_rules();
    let mut findings = Vec::new();

    let openers = rules.block_opener.find_iter(stripped).count();
    let ends = rules.end.find_iter(stripped).count();
    if openers != ends {
        findings.push(Finding::new(format!(
            "Block keyword mismatch: found {openers} block openers (do/function/if/for/while) but {ends} 'end' keywords. You might be missing an 'end' somewhere."
        )));
    }

    let repeats = rules.repeat.find_iter(stripped).count();
    let untils = rules.until.find_iter(stripped).count();
    if repeats != untils {
        findings.push(Finding::new(format!(
            "repeat/until mismatch: {repeats} 'repeat' but {untils} 'until'."
        )));
    }

    findings
}

fn count_pair(code: &str, open: char, close: char) -> (usize, usize) {
    code.chars().fold((0, 0), |(opened, closed), ch| {
        if ch == open {
            (opened + 1, closed)
        } else if ch == close {
            (opened, closed + 1)
        } else {
            (opened, closed)
        }
    })
}

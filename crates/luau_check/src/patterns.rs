use std::sync::OnceLock;

use regex::Regex;

use crate::report::Finding;

#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// The pattern captures a local function name; the rule fires when the
    /// next non-whitespace character after it is not `(`.
    MissingParameterList,
    Present,
}

struct PatternRule {
    source: &'static str,
    matcher: Matcher,
    message: &'static str,
}

const RULES: [PatternRule; 9] = [
    PatternRule {
        source: r"(?-u:\b)local\s+function\s+(?-u:\w)+",
        matcher: Matcher::MissingParameterList,
        message: "Function definition might be missing parentheses ().",
    },
    PatternRule {
        source: r"(?i)(?-u:\b)funtcion(?-u:\b)",
        matcher: Matcher::Present,
        message: "Typo: 'funtcion' should be 'function'.",
    },
    PatternRule {
        source: r"(?i)(?-u:\b)retrun(?-u:\b)",
        matcher: Matcher::Present,
        message: "Typo: 'retrun' should be 'return'.",
    },
    PatternRule {
        source: r"(?i)(?-u:\b)wahile(?-u:\b)",
        matcher: Matcher::Present,
        message: "Typo: 'wahile' should be 'while'.",
    },
    PatternRule {
        source: r"(?i)(?-u:\b)teh(?-u:\b)",
        matcher: Matcher::Present,
        message: "Typo: 'teh' should be 'the' (in a comment maybe?).",
    },
    PatternRule {
        source: r"(?i)(?-u:\b)prnit(?-u:\b)",
        matcher: Matcher::Present,
        message: "Typo: 'prnit' should be 'print'.",
    },
    PatternRule {
        source: r"===",
        matcher: Matcher::Present,
        message: "Luau uses == for equality, not === (that's JavaScript!).",
    },
    PatternRule {
        source: r"!==",
        matcher: Matcher::Present,
        message: "Luau uses ~= for not-equal, not !== (that's JavaScript!).",
    },
    PatternRule {
        source: r"!=(?:[^=]|$)",
        matcher: Matcher::Present,
        message: "Luau uses ~= for not-equal, not != (that's JavaScript/Python!).",
    },
];

struct CompiledRule {
    regex: Regex,
    matcher: Matcher,
    message: &'static str,
}

impl CompiledRule {
    fn matches(&self, code: &str) -> bool {
        match self.matcher {
            Matcher::Present => self.regex.is_match(code),
            Matcher::MissingParameterList => self
                .regex
                .find_iter(code)
                .any(|found| !code[found.end()..].trim_start().starts_with('(')),
        }
    }
}

fn compiled_rules() -> &'static [CompiledRule] {
    static CACHED: OnceLock<Vec<CompiledRule>> = OnceLock::new();
    CACHED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| CompiledRule {
                regex: Regex::new(rule.source).expect("typo pattern regex must compile"),
                matcher: rule.matcher,
                message: rule.message,
            })
            .collect()
    })
}

/// Checks the unstripped text against every rule; each rule fires at most once.
pub(crate) fn pattern_findings(code: &str) -> Vec<Finding> {
    compiled_rules()
        .iter()
        .filter(|rule| rule.matches(code))
        .map(|rule| Finding::new(rule.message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pattern_findings;

    fn messages(code: &str) -> Vec<String> {
        pattern_findings(code)
            .into_iter()
            .map(|finding| finding.message().to_string())
            .collect()
    }

    #[test]
    fn local_function_with_parameter_list_is_clean() {
        assert!(messages("local function onTouch(hit) end").is_empty());
        assert!(messages("local function spaced (a, b) end").is_empty());
    }

    #[test]
    fn local_function_without_parameter_list_fires_once() {
        let found = messages("local function a end\nlocal function b end");
        assert_eq!(found, vec!["Function definition might be missing parentheses ()."]);
    }

    #[test]
    fn local_function_at_end_of_text_fires() {
        let found = messages("local function dangling");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn typos_match_case_insensitively_and_whole_words_only() {
        assert_eq!(
            messages("RETRUN x"),
            vec!["Typo: 'retrun' should be 'return'."]
        );
        assert!(messages("retruns x").is_empty());
    }

    #[test]
    fn strict_inequality_does_not_also_report_plain_inequality() {
        assert_eq!(
            messages("if a !== b then end"),
            vec!["Luau uses ~= for not-equal, not !== (that's JavaScript!)."]
        );
    }

    #[test]
    fn plain_inequality_at_end_of_text_fires() {
        assert_eq!(
            messages("a !="),
            vec!["Luau uses ~= for not-equal, not != (that's JavaScript/Python!)."]
        );
    }

    #[test]
    fn every_matching_rule_fires_in_declaration_order() {
        let found = messages("funtcion f() prnit(teh) end if a === b then end");
        assert_eq!(
            found,
            vec![
                "Typo: 'funtcion' should be 'function'.",
                "Typo: 'teh' should be 'the' (in a comment maybe?).",
                "Typo: 'prnit' should be 'print'.",
                "Luau uses == for equality, not === (that's JavaScript!).",
            ]
        );
    }
}

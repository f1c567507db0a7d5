//! Placeholder substitution.
//!
//! The line is scanned once, left to right. At each step the earliest
//! occurrence of any mapped placeholder is replaced (the longest token wins
//! when two start at the same offset) and scanning resumes after the token.
//! Replacement text is never scanned again, so a value that happens to
//! contain a placeholder token is emitted verbatim.

use crate::error::{BlineError, Result};
use crate::model::{MissingPolicy, Template, VariableSet};

pub fn resolve(
    template: &Template,
    variables: &VariableSet,
    policy: MissingPolicy,
) -> Result<String> {
    let line = template.line.as_str();
    let mut output = String::with_capacity(line.len());
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let Some((offset, token, variable)) = next_placeholder(template, rest) else {
            output.push_str(rest);
            break;
        };

        output.push_str(&rest[..offset]);
        match lookup(template, variables, variable) {
            Some(value) => output.push_str(value),
            None => match policy {
                MissingPolicy::Empty => {}
                MissingPolicy::Literal => output.push_str(token),
                MissingPolicy::Error => {
                    return Err(BlineError::MissingVariable {
                        placeholder: token.to_string(),
                        variable: variable.to_string(),
                    })
                }
            },
        }
        pos += offset + token.len();
    }

    Ok(output)
}

/// Earliest mapped placeholder in `haystack`: (byte offset, token, variable name).
fn next_placeholder<'t>(
    template: &'t Template,
    haystack: &str,
) -> Option<(usize, &'t str, &'t str)> {
    template
        .variables
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .filter_map(|(token, variable)| {
            haystack
                .find(token.as_str())
                .map(|offset| (offset, token.as_str(), variable.as_str()))
        })
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())))
}

fn lookup<'a>(template: &'a Template, variables: &'a VariableSet, name: &str) -> Option<&'a str> {
    variables
        .get(name)
        .or_else(|| template.defaults.get(name))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ping() -> Template {
        Template::new("ping -c {{N}} {{HOST}}")
            .with_placeholder("{{N}}", "count")
            .with_placeholder("{{HOST}}", "host")
    }

    fn vars(pairs: &[(&str, &str)]) -> VariableSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_every_placeholder() {
        let out = resolve(
            &ping(),
            &vars(&[("count", "4"), ("host", "example.com")]),
            MissingPolicy::Empty,
        )
        .unwrap();
        assert_eq!(out, "ping -c 4 example.com");
    }

    #[test]
    fn missing_variable_becomes_empty() {
        let host = vars(&[("host", "example.com")]);
        let out = resolve(&ping(), &host, MissingPolicy::Empty).unwrap();
        assert_eq!(out, "ping -c  example.com");
    }

    #[test]
    fn missing_variable_left_literal() {
        let host = vars(&[("host", "example.com")]);
        let out = resolve(&ping(), &host, MissingPolicy::Literal).unwrap();
        assert_eq!(out, "ping -c {{N}} example.com");
    }

    #[test]
    fn missing_variable_errors_under_strict_policy() {
        let host = vars(&[("host", "example.com")]);
        let err = resolve(&ping(), &host, MissingPolicy::Error).unwrap_err();
        match err {
            BlineError::MissingVariable {
                placeholder,
                variable,
            } => {
                assert_eq!(placeholder, "{{N}}");
                assert_eq!(variable, "count");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unused_placeholder_never_errors() {
        let tpl = Template::new("uptime").with_placeholder("{{HOST}}", "host");
        let out = resolve(&tpl, &VariableSet::new(), MissingPolicy::Error).unwrap();
        assert_eq!(out, "uptime");
    }

    #[test]
    fn replaces_all_occurrences() {
        let tpl = Template::new("ssh HOST -t 'echo HOST'").with_placeholder("HOST", "host");
        let out = resolve(&tpl, &vars(&[("host", "box")]), MissingPolicy::Empty).unwrap();
        assert_eq!(out, "ssh box -t 'echo box'");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let tpl = Template::new("{{A}} {{B}}")
            .with_placeholder("{{A}}", "a")
            .with_placeholder("{{B}}", "b");
        let values = vars(&[("a", "{{B}}"), ("b", "x")]);
        let out = resolve(&tpl, &values, MissingPolicy::Empty).unwrap();
        assert_eq!(out, "{{B}} x");
    }

    #[test]
    fn self_referencing_value_terminates() {
        let tpl = Template::new("X").with_placeholder("X", "x");
        let out = resolve(&tpl, &vars(&[("x", "XX")]), MissingPolicy::Empty).unwrap();
        assert_eq!(out, "XX");
    }

    #[test]
    fn longest_token_wins_at_same_offset() {
        let tpl = Template::new("$HOSTNAME $HOST")
            .with_placeholder("$HOST", "host")
            .with_placeholder("$HOSTNAME", "hostname");
        let out = resolve(
            &tpl,
            &vars(&[("host", "h"), ("hostname", "hn")]),
            MissingPolicy::Empty,
        )
        .unwrap();
        assert_eq!(out, "hn h");
    }

    #[test]
    fn template_defaults_fill_gaps() {
        let tpl = ping().with_default("count", "1");
        let host = vars(&[("host", "example.com")]);
        let out = resolve(&tpl, &host, MissingPolicy::Error).unwrap();
        assert_eq!(out, "ping -c 1 example.com");

        let out = resolve(
            &tpl,
            &vars(&[("count", "9"), ("host", "example.com")]),
            MissingPolicy::Error,
        )
        .unwrap();
        assert_eq!(out, "ping -c 9 example.com");
    }

    #[test]
    fn variable_names_are_case_sensitive() {
        let tpl = Template::new("<h>").with_placeholder("<h>", "Host");
        let out = resolve(&tpl, &vars(&[("host", "lower")]), MissingPolicy::Empty).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn empty_tokens_are_ignored() {
        let tpl = Template::new("ls -la").with_placeholder("", "x");
        let out = resolve(&tpl, &vars(&[("x", "boom")]), MissingPolicy::Empty).unwrap();
        assert_eq!(out, "ls -la");
    }

    #[test]
    fn multibyte_text_around_tokens() {
        let tpl = Template::new("échо «NAME» ✓").with_placeholder("NAME", "name");
        let out = resolve(&tpl, &vars(&[("name", "zoë")]), MissingPolicy::Empty).unwrap();
        assert_eq!(out, "échо «zoë» ✓");
    }
}

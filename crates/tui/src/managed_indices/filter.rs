//! Search box syntax and its translation into backend filters.
//!
//! Supported clauses:
//! - bare words and `"quoted phrases"` are terms
//! - `field:value`, `field:"quoted value"`, and `field:(a or b)` are field clauses
//! - `is:flag` is a flag clause
//! - a leading `-` negates any clause
//!
//! Only `indices` and `data_streams` field clauses reach the backend.
//! Multiple values of one field flatten into a single list (logical OR).
//! Negation is parsed but the backend only accepts positive lists, so
//! negated values are sent like any other.

use std::iter::Peekable;
use std::str::Chars;

pub const FIELD_INDICES: &str = "indices";
pub const FIELD_DATA_STREAMS: &str = "data_streams";

const FLAG_FIELD: &str = "is";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Term {
        value: String,
        negated: bool,
    },
    Field {
        field: String,
        values: Vec<String>,
        negated: bool,
    },
    Is {
        flag: String,
        negated: bool,
    },
}

/// Parsed search box contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAst {
    clauses: Vec<Clause>,
}

/// Backend filter lists derived from a [`QueryAst`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilters {
    pub terms: Vec<String>,
    pub indices: Vec<String>,
    pub data_streams: Vec<String>,
}

impl QueryAst {
    pub fn parse(input: &str) -> Self {
        let mut chars = input.chars().peekable();
        let mut clauses = Vec::new();

        loop {
            skip_whitespace(&mut chars);
            let Some(&first) = chars.peek() else {
                break;
            };

            let negated = first == '-';
            if negated {
                chars.next();
            }

            if chars.peek() == Some(&'"') {
                chars.next();
                let value = read_quoted(&mut chars);
                if !value.is_empty() {
                    clauses.push(Clause::Term { value, negated });
                }
                continue;
            }

            let word = read_until(&mut chars, |c| c.is_whitespace() || c == ':');
            if chars.peek() == Some(&':') {
                chars.next();
                let values = read_field_values(&mut chars);
                if word == FLAG_FIELD {
                    clauses.extend(
                        values
                            .into_iter()
                            .map(|flag| Clause::Is { flag, negated }),
                    );
                } else if !word.is_empty() {
                    clauses.push(Clause::Field {
                        field: word,
                        values,
                        negated,
                    });
                }
            } else if !word.is_empty() && !is_keyword(&word) {
                clauses.push(Clause::Term {
                    value: word,
                    negated,
                });
            }
        }

        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn term_values(&self) -> Vec<String> {
        self.clauses
            .iter()
            .filter_map(|clause| match clause {
                Clause::Term { value, .. } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// All values of every clause on `field`, flattened.
    pub fn field_values(&self, field: &str) -> Vec<String> {
        self.clauses
            .iter()
            .filter_map(|clause| match clause {
                Clause::Field {
                    field: name,
                    values,
                    ..
                } if name == field => Some(values.iter().cloned()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Replace every clause on `field` with a single `field:value` clause.
    pub fn with_field_value(mut self, field: &str, value: &str) -> Self {
        self.clauses.retain(
            |clause| !matches!(clause, Clause::Field { field: name, .. } if name == field),
        );
        self.clauses.push(Clause::Field {
            field: field.to_string(),
            values: vec![value.to_string()],
            negated: false,
        });
        self
    }

    /// Render back to search box text.
    pub fn to_query_string(&self) -> String {
        self.clauses
            .iter()
            .map(render_clause)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Translate search text into backend filters.
pub fn translate(ast: &QueryAst) -> RecordFilters {
    RecordFilters {
        terms: ast.term_values(),
        indices: ast.field_values(FIELD_INDICES),
        data_streams: ast.field_values(FIELD_DATA_STREAMS),
    }
}

/// Search text narrowed to a single data stream.
pub fn with_data_stream(search: &str, data_stream: &str) -> String {
    QueryAst::parse(search)
        .with_field_value(FIELD_DATA_STREAMS, data_stream)
        .to_query_string()
}

fn is_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("or") || word.eq_ignore_ascii_case("and")
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn read_until(chars: &mut Peekable<Chars<'_>>, stop: impl Fn(char) -> bool) -> String {
    let mut out = String::new();
    while let Some(c) = chars.next_if(|c| !stop(*c)) {
        out.push(c);
    }
    out
}

/// Read up to the closing quote; the opening quote is already consumed.
fn read_quoted(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn read_field_values(chars: &mut Peekable<Chars<'_>>) -> Vec<String> {
    match chars.peek() {
        Some('"') => {
            chars.next();
            vec![read_quoted(chars)]
        }
        Some('(') => {
            chars.next();
            let mut values = Vec::new();
            loop {
                skip_whitespace(chars);
                match chars.peek() {
                    None => break,
                    Some(')') => {
                        chars.next();
                        break;
                    }
                    Some('"') => {
                        chars.next();
                        values.push(read_quoted(chars));
                    }
                    Some(_) => {
                        let word = read_until(chars, |c| c.is_whitespace() || c == ')');
                        if !is_keyword(&word) {
                            values.push(word);
                        }
                    }
                }
            }
            values
        }
        _ => {
            let word = read_until(chars, char::is_whitespace);
            if word.is_empty() { Vec::new() } else { vec![word] }
        }
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | ':' | '(' | ')'))
}

fn render_value(value: &str) -> String {
    if needs_quotes(value) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

fn render_clause(clause: &Clause) -> String {
    let (negated, body) = match clause {
        Clause::Term { value, negated } => (*negated, render_value(value)),
        Clause::Is { flag, negated } => (*negated, format!("{FLAG_FIELD}:{flag}")),
        Clause::Field {
            field,
            values,
            negated,
        } => {
            let rendered = match values.as_slice() {
                [single] => render_value(single),
                many => format!(
                    "({})",
                    many.iter()
                        .map(|v| render_value(v))
                        .collect::<Vec<_>>()
                        .join(" or ")
                ),
            };
            (*negated, format!("{field}:{rendered}"))
        }
    };
    if negated { format!("-{body}") } else { body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_and_fields() {
        let ast = QueryAst::parse(r#"logs "app one" indices:(a or b) data_streams:metrics"#);
        let filters = translate(&ast);
        assert_eq!(filters.terms, vec!["logs", "app one"]);
        assert_eq!(filters.indices, vec!["a", "b"]);
        assert_eq!(filters.data_streams, vec!["metrics"]);
    }

    #[test]
    fn test_repeated_field_clauses_flatten() {
        let ast = QueryAst::parse("indices:a indices:\"b c\"");
        assert_eq!(translate(&ast).indices, vec!["a", "b c"]);
    }

    #[test]
    fn test_unknown_clauses_ignored() {
        let ast = QueryAst::parse("is:open policy:hot -logs");
        let filters = translate(&ast);
        assert_eq!(filters.terms, vec!["logs"]);
        assert!(filters.indices.is_empty());
        assert!(filters.data_streams.is_empty());
        assert!(ast.clauses().contains(&Clause::Is {
            flag: "open".to_string(),
            negated: false
        }));
        assert!(ast.clauses().contains(&Clause::Term {
            value: "logs".to_string(),
            negated: true
        }));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(QueryAst::parse("").is_empty());
        assert!(QueryAst::parse("   - ").is_empty());
        assert_eq!(translate(&QueryAst::parse("")), RecordFilters::default());
    }

    #[test]
    fn test_with_data_stream_replaces_existing_clause() {
        assert_eq!(
            with_data_stream("logs data_streams:old", "metrics"),
            "logs data_streams:metrics"
        );
        assert_eq!(with_data_stream("", "my stream"), "data_streams:\"my stream\"");
    }

    #[test]
    fn test_render_round_trips() {
        let text = r#"-"a b" indices:(x or "y z") is:open"#;
        let ast = QueryAst::parse(text);
        assert_eq!(QueryAst::parse(&ast.to_query_string()), ast);
    }
}

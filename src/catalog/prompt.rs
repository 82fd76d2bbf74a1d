//! Prompt template compilation and rendering.
//!
//! Fact lines are parsed once when the catalog is built, so rendering a
//! prompt for a request cannot fail.

use std::collections::HashMap;

use super::CatalogError;

/// Field values for one request, keyed by `FieldDef::key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilledFields {
    values: HashMap<&'static str, String>,
}

impl FilledFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: String) {
        self.values.insert(key, value);
    }

    /// Value for `key`, or `""` when the key was never filled.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(&'static str, String)> for FilledFields {
    fn from_iter<I: IntoIterator<Item = (&'static str, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Field {
        key: &'static str,
        fallback: Option<&'static str>,
    },
}

/// A fact line split into literal text and placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLine {
    segments: Vec<Segment>,
}

impl CompiledLine {
    pub fn parse(document: &'static str, line: &'static str) -> Result<Self, CatalogError> {
        let mut segments = Vec::new();
        let mut rest = line;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(&rest[..open]));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| CatalogError::MalformedPlaceholder {
                    document,
                    line: line.to_string(),
                })?;
            let inner = &after[..close];
            let (key, fallback) = match inner.split_once('|') {
                Some((key, fallback)) => (key.trim(), Some(fallback)),
                None => (inner.trim(), None),
            };
            if key.is_empty() || key.contains('{') {
                return Err(CatalogError::MalformedPlaceholder {
                    document,
                    line: line.to_string(),
                });
            }
            segments.push(Segment::Field { key, fallback });
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Ok(Self { segments })
    }

    /// Keys of every placeholder in the line, in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { key, .. } => Some(*key),
            Segment::Literal(_) => None,
        })
    }

    pub fn render(&self, fields: &FilledFields, out: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { key, fallback } => {
                    let value = fields.get(key);
                    match fallback {
                        Some(fallback) if value.is_empty() => out.push_str(fallback),
                        _ => out.push_str(value),
                    }
                }
            }
        }
    }
}

/// Renders `<instruction>\n\nFacts:\n- ...\n\nConstraints:\n- ...`.
pub fn render_prompt(
    instruction: &str,
    facts: &[CompiledLine],
    constraints: &[&str],
    fields: &FilledFields,
) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(instruction);
    out.push_str("\n\nFacts:");
    for fact in facts {
        out.push_str("\n- ");
        fact.render(fields, &mut out);
    }
    out.push_str("\n\nConstraints:");
    for constraint in constraints {
        out.push_str("\n- ");
        out.push_str(constraint);
    }
    out
}

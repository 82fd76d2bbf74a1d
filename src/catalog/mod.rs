//! Template catalog - the fixed set of document types the server can draft.
//!
//! Entries are declared as static tables in the per-category modules:
//! - `government` - letters to agencies and tenancy notices
//! - `business` - quotations, offers, payment demands
//! - `general` - everyday correspondence
//!
//! `Catalog::builtin()` checks every declaration once at startup, so a
//! prompt can never reference a field its form does not collect.

pub mod business;
pub mod general;
pub mod government;
pub mod model;
pub mod prompt;

use std::collections::HashSet;

pub use model::{Category, DocumentDef, FieldDef, FieldType, PromptDef, SelectOption};
pub use prompt::FilledFields;

use prompt::{render_prompt, CompiledLine};
use thiserror::Error;

/// Errors found while checking catalog declarations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("document type '{0}' is declared more than once")]
    DuplicateDocument(&'static str),
    #[error("document type '{document}' declares field '{field}' more than once")]
    DuplicateField {
        document: &'static str,
        field: &'static str,
    },
    #[error("document type '{document}' has a malformed placeholder in '{line}'")]
    MalformedPlaceholder { document: &'static str, line: String },
    #[error("document type '{document}' prompt references unknown field '{field}'")]
    UnknownPlaceholder {
        document: &'static str,
        field: &'static str,
    },
    #[error("document type '{document}' never uses field '{field}' in its prompt")]
    UnusedField {
        document: &'static str,
        field: &'static str,
    },
    #[error("select field '{field}' of '{document}' has no options")]
    EmptySelect {
        document: &'static str,
        field: &'static str,
    },
    #[error("default '{value}' of select field '{field}' in '{document}' is not one of its options")]
    InvalidSelectDefault {
        document: &'static str,
        field: &'static str,
        value: &'static str,
    },
}

/// Tone options shared by most letters.
pub const TONES: &[SelectOption] = &[
    SelectOption {
        value: "polite",
        label: "Polite",
    },
    SelectOption {
        value: "neutral",
        label: "Neutral",
    },
    SelectOption {
        value: "firm",
        label: "Firm",
    },
    SelectOption {
        value: "formal",
        label: "Formal",
    },
];

/// A checked catalog entry.
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    def: &'static DocumentDef,
    facts: Vec<CompiledLine>,
}

impl DocumentSpec {
    fn compile(def: &'static DocumentDef) -> Result<Self, CatalogError> {
        let mut keys = HashSet::new();
        for field in def.fields {
            if !keys.insert(field.key) {
                return Err(CatalogError::DuplicateField {
                    document: def.key,
                    field: field.key,
                });
            }
            if field.field_type == FieldType::Select {
                if field.options.is_empty() {
                    return Err(CatalogError::EmptySelect {
                        document: def.key,
                        field: field.key,
                    });
                }
                if let Some(value) = field.default {
                    if !field.options.iter().any(|o| o.value == value) {
                        return Err(CatalogError::InvalidSelectDefault {
                            document: def.key,
                            field: field.key,
                            value,
                        });
                    }
                }
            }
        }

        let facts = def
            .prompt
            .facts
            .iter()
            .map(|&line| CompiledLine::parse(def.key, line))
            .collect::<Result<Vec<_>, _>>()?;

        let mut referenced = HashSet::new();
        for key in facts.iter().flat_map(|line| line.keys()) {
            if !keys.contains(key) {
                return Err(CatalogError::UnknownPlaceholder {
                    document: def.key,
                    field: key,
                });
            }
            referenced.insert(key);
        }

        if let Some(unused) = def.fields.iter().find(|f| !referenced.contains(f.key)) {
            return Err(CatalogError::UnusedField {
                document: def.key,
                field: unused.key,
            });
        }

        Ok(Self { def, facts })
    }

    pub fn key(&self) -> &'static str {
        self.def.key
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn category(&self) -> Category {
        self.def.category
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        self.def.fields
    }

    pub fn system(&self) -> &'static str {
        self.def.system
    }

    /// Build the user prompt for a set of filled fields.
    pub fn render_prompt(&self, fields: &FilledFields) -> String {
        render_prompt(
            self.def.prompt.instruction,
            &self.facts,
            self.def.prompt.constraints,
            fields,
        )
    }
}

/// Documents of one category, for the grouped index.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub documents: Vec<&'a DocumentSpec>,
}

/// Read-only lookup over checked document specs, in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<DocumentSpec>,
}

impl Catalog {
    /// Check and load a list of declarations.
    pub fn from_defs(defs: &[&'static DocumentDef]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(defs.len());
        for &def in defs {
            if !seen.insert(def.key) {
                return Err(CatalogError::DuplicateDocument(def.key));
            }
            documents.push(DocumentSpec::compile(def)?);
        }
        log::debug!("Catalog loaded with {} document types", documents.len());
        Ok(Self { documents })
    }

    /// The catalog shipped with the server.
    pub fn builtin() -> Result<Self, CatalogError> {
        let defs: Vec<&'static DocumentDef> = government::DOCUMENTS
            .iter()
            .chain(business::DOCUMENTS)
            .chain(general::DOCUMENTS)
            .collect();
        Self::from_defs(&defs)
    }

    pub fn lookup(&self, type_id: &str) -> Option<&DocumentSpec> {
        self.documents.iter().find(|d| d.key() == type_id)
    }

    pub fn list_all(&self) -> impl Iterator<Item = &DocumentSpec> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Entries grouped by category; groups appear in first-seen order.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for doc in &self.documents {
            match groups.iter_mut().find(|g| g.category == doc.category()) {
                Some(group) => group.documents.push(doc),
                None => groups.push(CategoryGroup {
                    category: doc.category(),
                    documents: vec![doc],
                }),
            }
        }
        groups
    }
}

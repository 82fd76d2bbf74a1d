use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{DocumentSpec, FieldDef, FilledFields};
use crate::drafting::DraftOutcome;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    #[schema(example = "gov_enquiry")]
    pub key: String,
    #[schema(example = "Government Enquiry Letter")]
    pub name: String,
    #[schema(example = "government")]
    pub category: String,
    #[schema(example = "Government")]
    pub category_label: String,
}

impl From<&DocumentSpec> for DocumentSummary {
    fn from(spec: &DocumentSpec) -> Self {
        Self {
            key: spec.key().to_string(),
            name: spec.name().to_string(),
            category: spec.category().key().to_string(),
            category_label: spec.category().label().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentGroup {
    #[schema(example = "business")]
    pub category: String,
    #[schema(example = "Business")]
    pub label: String,
    pub documents: Vec<DocumentSummary>,
}

/// Documents index: the flat list plus the same entries grouped by category.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentIndex {
    pub items: Vec<DocumentSummary>,
    pub groups: Vec<DocumentGroup>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectOptionView {
    pub value: String,
    pub label: String,
}

/// One input control of a generated form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldView {
    #[schema(example = "yourName")]
    pub key: String,
    #[schema(example = "Your Name")]
    pub label: String,
    /// `text`, `textarea`, `date` or `select`
    #[serde(rename = "type")]
    #[schema(example = "text")]
    pub field_type: String,
    pub required: bool,
    pub default: Option<String>,
    pub example: Option<String>,
    pub options: Vec<SelectOptionView>,
    /// Filled value echoed back after a generate request.
    pub value: Option<String>,
}

impl FieldView {
    pub fn new(field: &FieldDef, value: Option<&str>) -> Self {
        Self {
            key: field.key.to_string(),
            label: field.label.to_string(),
            field_type: field.field_type.as_str().to_string(),
            required: field.required,
            default: field.default.map(str::to_string),
            example: field.example.map(str::to_string),
            options: field
                .options
                .iter()
                .map(|o| SelectOptionView {
                    value: o.value.to_string(),
                    label: o.label.to_string(),
                })
                .collect(),
            value: value.map(str::to_string),
        }
    }

    pub fn list(fields: &[FieldDef], filled: Option<&FilledFields>) -> Vec<Self> {
        fields
            .iter()
            .map(|f| Self::new(f, filled.map(|values| values.get(f.key))))
            .collect()
    }
}

/// A document form, optionally carrying the result of a generate request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentForm {
    #[serde(rename = "type")]
    #[schema(example = "gov_enquiry")]
    pub type_id: String,
    #[schema(example = "Government Enquiry Letter")]
    pub name: String,
    pub category: String,
    pub fields: Vec<FieldView>,
    /// Draft text, `Missing: ...`, or `Generation error: ...`.
    pub output: Option<String>,
    /// `draft`, `missing` or `error` when `output` is present.
    pub outcome: Option<String>,
    /// Labels of required fields left empty.
    pub missing: Vec<String>,
}

impl DocumentForm {
    pub fn empty(spec: &DocumentSpec) -> Self {
        Self {
            type_id: spec.key().to_string(),
            name: spec.name().to_string(),
            category: spec.category().key().to_string(),
            fields: FieldView::list(spec.fields(), None),
            output: None,
            outcome: None,
            missing: Vec::new(),
        }
    }

    pub fn with_outcome(spec: &DocumentSpec, filled: &FilledFields, outcome: &DraftOutcome) -> Self {
        let missing = outcome
            .missing()
            .map(|errors| errors.labels().into_iter().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            fields: FieldView::list(spec.fields(), Some(filled)),
            output: Some(outcome.output()),
            outcome: Some(outcome.kind().to_string()),
            missing,
            ..Self::empty(spec)
        }
    }
}

/// Form body carrying an edited draft.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftRequest {
    #[serde(default)]
    #[schema(example = "Dear Sir or Madam,\n\n...")]
    pub draft: String,
}

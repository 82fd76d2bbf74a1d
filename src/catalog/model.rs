//! Declarative shapes for catalog entries and their form fields.

use serde::Serialize;

/// Document category. The set is closed; every catalog entry belongs to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Government,
    Business,
    General,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Business => "business",
            Self::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Business => "Business",
            Self::General => "General",
        }
    }
}

/// Input control rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Date,
    Select,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Select => "select",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One piece of user-supplied information a template needs.
///
/// Built with `const` helpers so catalog tables stay readable:
///
/// ```
/// use letterdesk_server::catalog::model::FieldDef;
///
/// const NAME: FieldDef = FieldDef::text("yourName", "Your Name").required();
/// assert!(NAME.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub default: Option<&'static str>,
    pub example: Option<&'static str>,
    pub options: &'static [SelectOption],
}

impl FieldDef {
    const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            required: false,
            default: None,
            example: None,
            options: &[],
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    pub const fn textarea(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Textarea)
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Date)
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        let mut field = Self::new(key, label, FieldType::Select);
        field.options = options;
        field
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn with_example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// Declarative prompt: an instruction line, fact lines with `{key}` or
/// `{key|fallback}` placeholders, and constraint lines.
#[derive(Debug, Clone, Copy)]
pub struct PromptDef {
    pub instruction: &'static str,
    pub facts: &'static [&'static str],
    pub constraints: &'static [&'static str],
}

/// Static declaration of one document type, checked when the catalog is built.
#[derive(Debug, Clone, Copy)]
pub struct DocumentDef {
    pub key: &'static str,
    pub category: Category,
    pub name: &'static str,
    pub fields: &'static [FieldDef],
    pub system: &'static str,
    pub prompt: PromptDef,
}

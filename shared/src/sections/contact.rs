//! Contact section: controlled form, link list or floating chat button.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    content::IconName,
    outline::{heading, Block, Outline, Section},
    variant::closed_variant,
    ConfigError,
};

closed_variant! {
    /// Contact section layouts.
    pub enum ContactVariant for "contact" default Form {
        /// Controlled form.
        Form => "form",
        /// Floating WhatsApp chat button.
        WhatsappFloat => "whatsapp-float",
        /// Link cards.
        Cards => "cards",
        /// Full-width link banner.
        Banner => "banner",
        /// Heading and links only.
        Minimal => "minimal",
    }
}

impl ContactVariant {
    /// Container for the form or the contact links.
    pub fn layout_class(self) -> &'static str {
        match self {
            ContactVariant::Form => "flex w-full flex-col gap-5",
            ContactVariant::WhatsappFloat => "fixed bottom-6 right-6 z-50",
            ContactVariant::Cards => "grid w-full grid-cols-1 gap-6 sm:grid-cols-2",
            ContactVariant::Banner => "flex flex-wrap justify-center gap-4",
            ContactVariant::Minimal => "flex flex-col items-center gap-3",
        }
    }

    /// Section background; only the banner is filled.
    pub fn surface_class(self) -> &'static str {
        match self {
            ContactVariant::Banner => "bg-[var(--primary)] text-white",
            _ => "",
        }
    }
}

/// Input kind of a contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Email address.
    Email,
    /// Phone number.
    Tel,
    /// Multi-line text.
    Textarea,
    /// Drop-down over the field's options.
    Select,
    /// Single checkbox.
    Checkbox,
    /// Radio group over the field's options.
    Radio,
}

impl FieldKind {
    /// Tag as written in configuration and the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
        }
    }
}

impl std::str::FromStr for FieldKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(FieldKind::Text),
            "email" => Ok(FieldKind::Email),
            "tel" => Ok(FieldKind::Tel),
            "textarea" => Ok(FieldKind::Textarea),
            "select" => Ok(FieldKind::Select),
            "checkbox" => Ok(FieldKind::Checkbox),
            "radio" => Ok(FieldKind::Radio),
            other => Err(ConfigError::InvalidFieldKind {
                field: String::new(),
                kind: other.to_string(),
            }),
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Descriptor for one generated form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContactField")]
pub struct ContactField {
    /// Key in the submitted payload.
    pub name: String,
    /// Visible label.
    pub label: String,
    /// Input kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Choices for select and radio fields.
    pub options: Vec<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Sets the HTML `required` attribute.
    pub required: bool,
}

impl ContactField {
    /// Builds a field, rejecting unknown input kinds.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: &str,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let kind = parse_kind(&name, kind)?;
        Ok(Self {
            name,
            label: label.into(),
            kind,
            options: Vec::new(),
            placeholder: None,
            required: false,
        })
    }

    /// Same field with choices.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Same field marked required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

pub(crate) fn parse_kind(field: &str, kind: &str) -> Result<FieldKind, ConfigError> {
    kind.parse().map_err(|_| ConfigError::InvalidFieldKind {
        field: field.to_string(),
        kind: kind.to_string(),
    })
}

#[derive(Deserialize)]
struct RawContactField {
    name: String,
    label: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    required: bool,
}

impl TryFrom<RawContactField> for ContactField {
    type Error = ConfigError;

    fn try_from(raw: RawContactField) -> Result<Self, Self::Error> {
        let kind = parse_kind(&raw.name, &raw.kind)?;
        Ok(Self {
            name: raw.name,
            label: raw.label,
            kind,
            options: raw.options,
            placeholder: raw.placeholder,
            required: raw.required,
        })
    }
}

/// Current value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text-like inputs, selects and radios.
    Text(String),
    /// Checkbox state.
    Checked(bool),
}

impl FieldValue {
    /// Text content, empty for checkboxes.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(_) => "",
        }
    }

    /// Checkbox state, false for text.
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }
}

/// Values handed to the submit callback, keyed by field name.
pub type FormPayload = BTreeMap<String, FieldValue>;

/// Field values of one controlled contact form.
///
/// Submitting hands out a snapshot and keeps the values, so the visitor can
/// edit and resubmit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: FormPayload,
}

impl ContactForm {
    /// Records the latest value of `name`.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Current value of `name`, if it was ever changed.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Number of fields changed so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// No field has been changed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Snapshot for the submit callback.
    pub fn submit(&self) -> FormPayload {
        tracing::debug!(fields = self.values.len(), "contact form submitted");
        self.values.clone()
    }
}

/// A contact link such as email or phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Link text.
    pub label: String,
    /// Target, e.g. `mailto:` or `tel:`.
    pub href: String,
    /// Glyph before the text.
    #[serde(default)]
    pub icon: Option<IconName>,
}

/// Contact section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Form fields for the form layout.
    #[serde(default)]
    pub fields: Vec<ContactField>,
    /// Links for the card, banner and minimal layouts.
    #[serde(default)]
    pub cta: Vec<ContactLink>,
    /// International number for the floating WhatsApp button.
    #[serde(default)]
    pub whatsapp_number: Option<String>,
}

impl ContactContent {
    /// Chat link for the floating button.
    pub fn whatsapp_url(&self) -> Option<String> {
        self.whatsapp_number
            .as_deref()
            .map(|number| format!("https://wa.me/{number}"))
    }
}

impl Section for ContactContent {
    type Variant = ContactVariant;

    fn outline(&self, variant: ContactVariant) -> Outline {
        let mut outline = Outline::new();
        match variant {
            ContactVariant::WhatsappFloat if self.whatsapp_number.is_some() => {
                outline.push(Block::FloatingLink);
            },
            ContactVariant::Form => {
                heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
                outline.push(Block::Form).items(self.fields.len());
            },
            _ => {
                heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
                outline.push_if(!self.cta.is_empty(), Block::Actions);
            },
        }
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_banner_fills_its_background() {
        let filled: Vec<_> = ContactVariant::ALL
            .iter()
            .filter(|variant| !variant.surface_class().is_empty())
            .collect();
        assert_eq!(filled, [&ContactVariant::Banner]);
    }

    #[test]
    fn unknown_kind_is_rejected_with_field_name() {
        let err = ContactField::new("budget", "Budget", "range").unwrap_err();
        match err {
            ConfigError::InvalidFieldKind {
                field,
                kind,
            } => {
                assert_eq!(field, "budget");
                assert_eq!(kind, "range");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn payload_keeps_last_value_per_field() {
        let fields = [
            ContactField::new("name", "Name", "text").unwrap(),
            ContactField::new("email", "Email", "email").unwrap().required(),
            ContactField::new("topic", "Topic", "select")
                .unwrap()
                .with_options(["Web", "Mobile"]),
            ContactField::new("updates", "Send updates", "checkbox").unwrap(),
        ];

        let mut form = ContactForm::default();
        form.set("name", FieldValue::Text("Ad".to_string()));
        for field in &fields {
            let value = match field.kind {
                FieldKind::Checkbox => FieldValue::Checked(true),
                _ => FieldValue::Text(format!("{}-value", field.name)),
            };
            form.set(field.name.clone(), value);
        }

        let payload = form.submit();
        assert_eq!(payload.len(), fields.len());
        assert_eq!(payload["name"], FieldValue::Text("name-value".to_string()));
        assert!(payload["updates"].is_checked());
        // values survive submission
        assert_eq!(form.len(), fields.len());
    }

    #[test]
    fn whatsapp_float_needs_a_number() {
        let mut content = ContactContent {
            headline: Some("Talk to us".to_string()),
            ..ContactContent::default()
        };
        let outline = content.outline(ContactVariant::WhatsappFloat);
        assert!(!outline.has(Block::FloatingLink));
        assert!(outline.has(Block::Headline));

        content.whatsapp_number = Some("2348000000000".to_string());
        let outline = content.outline(ContactVariant::WhatsappFloat);
        assert_eq!(outline.blocks(), &[Block::FloatingLink]);
        assert_eq!(content.whatsapp_url().as_deref(), Some("https://wa.me/2348000000000"));
    }
}

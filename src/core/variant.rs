//! Block variants
//!
//! The closed set of field types a form block can take, together with the
//! per-variant rules the rest of the crate keys off (whether the required
//! flag is asked, which auxiliary fields are used).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field-type tag of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Form title, pinned to the head of the list
    Title,
    /// Single-line text input
    Text,
    /// Date input
    Date,
    /// Numeric input
    Number,
    /// Email input
    Email,
    /// Multi-line text area
    Textarea,
    /// Select box with a list of options
    Dropdown,
    /// Group of checkboxes with labelled choices
    CheckboxGroup,
    /// Group of radio buttons with labelled choices
    RadioGroup,
    /// Submit button; at most one per form
    Button,
}

impl Variant {
    /// Every variant, in the order a variant picker lists them
    pub const ALL: [Variant; 10] = [
        Variant::Title,
        Variant::Text,
        Variant::Date,
        Variant::Number,
        Variant::Dropdown,
        Variant::RadioGroup,
        Variant::CheckboxGroup,
        Variant::Textarea,
        Variant::Button,
        Variant::Email,
    ];

    /// Stable tag used in serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            Variant::Title => "title",
            Variant::Text => "text",
            Variant::Date => "date",
            Variant::Number => "number",
            Variant::Email => "email",
            Variant::Textarea => "textarea",
            Variant::Dropdown => "dropdown",
            Variant::CheckboxGroup => "checkboxGroup",
            Variant::RadioGroup => "radioGroup",
            Variant::Button => "button",
        }
    }

    /// Get a human-readable name for the variant
    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Title => "Form Name",
            Variant::Text => "Text",
            Variant::Date => "Date",
            Variant::Number => "Number",
            Variant::Email => "Email",
            Variant::Textarea => "Text Area",
            Variant::Dropdown => "Drop Down",
            Variant::CheckboxGroup => "Check Box",
            Variant::RadioGroup => "Radio Button",
            Variant::Button => "Button",
        }
    }

    /// Whether the user is asked for a required flag for this variant
    pub fn asks_required(&self) -> bool {
        matches!(
            self,
            Variant::Text | Variant::Date | Variant::Number | Variant::Email | Variant::Textarea
        )
    }

    /// Whether a required flag must be chosen before the block can be created.
    ///
    /// This is wider than [`Variant::asks_required`]: only title and button
    /// are exempt.
    pub fn needs_required_flag(&self) -> bool {
        !matches!(self, Variant::Title | Variant::Button)
    }

    /// Whether the variant carries labelled choices
    pub fn uses_choices(&self) -> bool {
        matches!(self, Variant::CheckboxGroup | Variant::RadioGroup)
    }

    /// Whether the variant carries dropdown options
    pub fn uses_options(&self) -> bool {
        matches!(self, Variant::Dropdown)
    }

    pub fn is_title(&self) -> bool {
        matches!(self, Variant::Title)
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Variant::Button)
    }

    /// HTML input type for the plain input variants
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Variant::Text => Some("text"),
            Variant::Date => Some("date"),
            Variant::Number => Some("number"),
            Variant::Email => Some("email"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a variant tag is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block variant: '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "formname" => Ok(Variant::Title),
            "text" => Ok(Variant::Text),
            "date" => Ok(Variant::Date),
            "number" => Ok(Variant::Number),
            "email" => Ok(Variant::Email),
            "textarea" => Ok(Variant::Textarea),
            "dropdown" => Ok(Variant::Dropdown),
            "checkboxgroup" | "checkbox" => Ok(Variant::CheckboxGroup),
            "radiogroup" | "radio" => Ok(Variant::RadioGroup),
            "button" => Ok(Variant::Button),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

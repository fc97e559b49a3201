//! Block type and validation errors
//!
//! A [`Block`] is one configured form field. Blocks are only ever produced by
//! [`validate_and_create`](super::validation::validate_and_create) and are
//! immutable afterwards; the UI rearranges the list, never a block in place.

use serde::Serialize;

use super::variant::Variant;
use super::BlockId;

/// A single form field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    id: BlockId,
    name: String,
    variant: Variant,
    required: bool,
    choice_labels: Vec<String>,
    options: Vec<String>,
}

impl Block {
    /// Assemble a block from already-validated parts.
    ///
    /// Fields the variant does not use are dropped here so a block never
    /// carries stale auxiliary data.
    pub(crate) fn from_validated(
        name: String,
        variant: Variant,
        required: bool,
        choice_labels: Vec<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id: BlockId::new(),
            name,
            variant,
            required: required && variant.asks_required(),
            choice_labels: if variant.uses_choices() { choice_labels } else { Vec::new() },
            options: if variant.uses_options() { options } else { Vec::new() },
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether the rendered control must be filled in. Always false for
    /// variants that do not ask for the flag.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Labels of a checkbox or radio group, one per choice
    pub fn choice_labels(&self) -> &[String] {
        &self.choice_labels
    }

    /// Number of choices of a checkbox or radio group
    pub fn choice_count(&self) -> usize {
        self.choice_labels.len()
    }

    /// Options of a dropdown, in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_title(&self) -> bool {
        self.variant.is_title()
    }

    pub fn is_button(&self) -> bool {
        self.variant.is_button()
    }
}

/// Block validation errors
///
/// Every kind is a recoverable input problem: the user corrects the pending
/// input and resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name is blank
    #[error("Please fill in a name for the field")]
    EmptyName,

    /// No variant selected
    #[error("Please choose an input type")]
    EmptyVariant,

    /// Required flag left unset for a variant that needs it
    #[error("Please choose whether the field is required")]
    MissingRequiredFlag,

    /// A button already exists in the form
    #[error("Only one button is allowed per form")]
    DuplicateButton,

    /// Checkbox/radio group without choices or with a blank label
    #[error("Please fill in all the fields for checkbox or radio buttons")]
    InvalidChoiceGroup,

    /// Dropdown without options
    #[error("Please add at least one option for the dropdown")]
    EmptyDropdownOptions,

    /// Choice count is not a non-negative integer
    #[error("Please enter a valid non-negative integer for the number of choices")]
    InvalidCount,
}

impl ValidationError {
    /// Machine-readable kind for the validation-error collaborator
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "EmptyName",
            ValidationError::EmptyVariant => "EmptyVariant",
            ValidationError::MissingRequiredFlag => "MissingRequiredFlag",
            ValidationError::DuplicateButton => "DuplicateButton",
            ValidationError::InvalidChoiceGroup => "InvalidChoiceGroup",
            ValidationError::EmptyDropdownOptions => "EmptyDropdownOptions",
            ValidationError::InvalidCount => "InvalidCount",
        }
    }
}

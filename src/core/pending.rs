//! Pending block input
//!
//! Unvalidated field values staged by the user before a block is created.
//! Nothing here is checked until the pending input is handed to
//! [`validate_and_create`](super::validation::validate_and_create).

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::block::ValidationError;
use super::validation::resize_choice_group;
use super::variant::Variant;

/// Tri-state required selection.
///
/// `Unset` is distinct from `No`: leaving the selector blank blocks block
/// creation for variants that need the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredFlag {
    #[default]
    #[serde(alias = "")]
    Unset,
    #[serde(alias = "false")]
    No,
    #[serde(alias = "true")]
    Yes,
}

impl RequiredFlag {
    /// The chosen value, or `None` while unset
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RequiredFlag::Unset => None,
            RequiredFlag::No => Some(false),
            RequiredFlag::Yes => Some(true),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, RequiredFlag::Unset)
    }
}

impl From<bool> for RequiredFlag {
    fn from(b: bool) -> Self {
        if b {
            RequiredFlag::Yes
        } else {
            RequiredFlag::No
        }
    }
}

impl From<Option<bool>> for RequiredFlag {
    fn from(b: Option<bool>) -> Self {
        b.map_or(RequiredFlag::Unset, RequiredFlag::from)
    }
}

impl FromStr for RequiredFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unset" => Ok(RequiredFlag::Unset),
            "false" | "no" => Ok(RequiredFlag::No),
            "true" | "yes" => Ok(RequiredFlag::Yes),
            other => Err(format!("Invalid required flag: '{}'", other)),
        }
    }
}

/// Staged field values for the next block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendingBlock {
    /// Label of the field
    pub name: String,
    /// Selected variant, `None` while the picker is blank
    #[serde(deserialize_with = "variant_from_tag")]
    pub variant: Option<Variant>,
    /// Required selection
    #[serde(deserialize_with = "required_from_json")]
    pub required: RequiredFlag,
    /// Number of choices for checkbox/radio groups
    pub choice_count: usize,
    /// Choice labels for checkbox/radio groups
    pub choice_labels: Vec<String>,
    /// Dropdown options
    pub options: Vec<String>,
}

impl Default for PendingBlock {
    fn default() -> Self {
        Self {
            name: String::new(),
            variant: Some(Variant::Text),
            required: RequiredFlag::No,
            choice_count: 0,
            choice_labels: Vec::new(),
            options: Vec::new(),
        }
    }
}

impl PendingBlock {
    /// Start pending input for the given variant
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            variant: Some(variant),
            ..Self::default()
        }
    }

    /// Set the required selection
    pub fn with_required(mut self, required: impl Into<RequiredFlag>) -> Self {
        self.required = required.into();
        self
    }

    /// Set choice labels; the choice count follows the label count
    pub fn with_choices<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choice_labels = labels.into_iter().map(Into::into).collect();
        self.choice_count = self.choice_labels.len();
        self
    }

    /// Set dropdown options
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Append a dropdown option. Blank input is ignored.
    ///
    /// Returns whether the option was added.
    pub fn add_option(&mut self, option: impl Into<String>) -> bool {
        let option = option.into();
        if option.trim().is_empty() {
            return false;
        }
        self.options.push(option);
        true
    }

    /// Remove the dropdown option at `index`
    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        if index < self.options.len() {
            Some(self.options.remove(index))
        } else {
            None
        }
    }

    /// Set the label of one choice. Returns false if `index` is outside the
    /// current choice count.
    pub fn set_choice_label(&mut self, index: usize, label: impl Into<String>) -> bool {
        if index >= self.choice_count {
            return false;
        }
        if self.choice_labels.len() < self.choice_count {
            self.choice_labels.resize(self.choice_count, String::new());
        }
        self.choice_labels[index] = label.into();
        true
    }

    /// Change the number of choices from raw user input.
    ///
    /// Existing labels are kept when growing and truncated when shrinking.
    /// On error the pending input is left untouched.
    pub fn resize_choices(&mut self, raw_count: &str) -> Result<usize, ValidationError> {
        let labels = resize_choice_group(&self.choice_labels, raw_count)?;
        self.choice_count = labels.len();
        self.choice_labels = labels;
        Ok(self.choice_count)
    }
}

fn variant_from_tag<'de, D>(deserializer: D) -> Result<Option<Variant>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag: Option<String> = Option::deserialize(deserializer)?;
    match tag.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(tag) => tag.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Accepts a JSON bool, `null`, or any string [`RequiredFlag`] parses
fn required_from_json<'de, D>(deserializer: D) -> Result<RequiredFlag, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(RequiredFlag::Unset),
        Some(Raw::Bool(b)) => Ok(b.into()),
        Some(Raw::Text(s)) => s.parse().map_err(serde::de::Error::custom),
    }
}

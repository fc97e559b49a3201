//! Block creation rules
//!
//! Validates pending input against the per-variant structural rules and the
//! list-level button rule, then materializes a [`Block`]. Checks run in a
//! fixed order and the first failure is reported.

use super::block::{Block, ValidationError};
use super::list::BlockList;
use super::pending::PendingBlock;
use super::variant::Variant;

/// Validate pending input and build an immutable block.
///
/// `existing` is only read for the button-uniqueness rule; appending the
/// block is left to the caller.
pub fn validate_and_create(
    pending: &PendingBlock,
    existing: &BlockList,
) -> Result<Block, ValidationError> {
    check_name(pending)?;
    let variant = check_variant(pending)?;
    check_required_flag(pending, variant)?;
    check_button_unique(variant, existing)?;
    check_choice_group(pending, variant)?;
    check_dropdown_options(pending, variant)?;

    let labels = if variant.uses_choices() {
        pending.choice_labels[..pending.choice_count].to_vec()
    } else {
        Vec::new()
    };

    Ok(Block::from_validated(
        pending.name.clone(),
        variant,
        pending.required.as_bool().unwrap_or(false),
        labels,
        pending.options.clone(),
    ))
}

/// Resize a choice-label sequence from raw user input.
///
/// Index `i` of the result keeps `current[i]` when present and is empty
/// otherwise, so growing preserves labels and shrinking truncates.
pub fn resize_choice_group(
    current: &[String],
    new_count: &str,
) -> Result<Vec<String>, ValidationError> {
    let count = parse_count(new_count)?;
    Ok((0..count)
        .map(|i| current.get(i).cloned().unwrap_or_default())
        .collect())
}

fn parse_count(raw: &str) -> Result<usize, ValidationError> {
    let value: i64 = raw.trim().parse().map_err(|_| ValidationError::InvalidCount)?;
    usize::try_from(value).map_err(|_| ValidationError::InvalidCount)
}

// ── Individual checks ───────────────────────────────────────────────────────

fn check_name(pending: &PendingBlock) -> Result<(), ValidationError> {
    if pending.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn check_variant(pending: &PendingBlock) -> Result<Variant, ValidationError> {
    pending.variant.ok_or(ValidationError::EmptyVariant)
}

fn check_required_flag(pending: &PendingBlock, variant: Variant) -> Result<(), ValidationError> {
    if variant.needs_required_flag() && pending.required.is_unset() {
        return Err(ValidationError::MissingRequiredFlag);
    }
    Ok(())
}

fn check_button_unique(variant: Variant, existing: &BlockList) -> Result<(), ValidationError> {
    if variant.is_button() && existing.has_button() {
        return Err(ValidationError::DuplicateButton);
    }
    Ok(())
}

/// A choice group needs at least one choice and a non-blank label for each
/// of the first `choice_count` entries. Missing entries count as blank.
fn check_choice_group(pending: &PendingBlock, variant: Variant) -> Result<(), ValidationError> {
    if !variant.uses_choices() {
        return Ok(());
    }
    let count = pending.choice_count;
    if count == 0 || pending.choice_labels.len() < count {
        return Err(ValidationError::InvalidChoiceGroup);
    }
    if pending.choice_labels[..count]
        .iter()
        .any(|label| label.trim().is_empty())
    {
        return Err(ValidationError::InvalidChoiceGroup);
    }
    Ok(())
}

fn check_dropdown_options(pending: &PendingBlock, variant: Variant) -> Result<(), ValidationError> {
    if variant.uses_options() && pending.options.is_empty() {
        return Err(ValidationError::EmptyDropdownOptions);
    }
    Ok(())
}

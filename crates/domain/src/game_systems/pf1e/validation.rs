//! Legality checks run before `compute_pf1e`.
//!
//! The engine accepts any combination; callers that want rules enforcement
//! run this gate first and surface its error instead of a playsheet.

use super::compute::ComputeInput;
use super::tier::{is_size_allowed_for_form, is_tier_available, TierFamily};
use crate::error::DomainError;

/// Reject requests the rules do not permit.
///
/// Checks, in order: the tier's family accepts the form's kind, the tier is
/// unlocked at the character's effective druid level, the chosen size is
/// legal for the tier, and elemental requests name an element.
pub fn validate_compute_input(input: &ComputeInput) -> Result<(), DomainError> {
    let tier = input.tier;
    let kind = input.form.kind;

    if !tier.family().accepts(kind) {
        return Err(DomainError::validation(format!(
            "{} cannot assume {} form '{}'",
            tier, kind, input.form.name
        )));
    }

    let edl = input.base.effective_druid_level;
    if !is_tier_available(tier, edl) {
        return Err(DomainError::constraint(format!(
            "{} requires effective druid level {}, character has {}",
            tier,
            tier.min_druid_level(),
            edl
        )));
    }

    if !is_size_allowed_for_form(tier, input.chosen_size, kind) {
        return Err(DomainError::validation(format!(
            "{} does not allow size {} for a {}",
            tier, input.chosen_size, kind
        )));
    }

    if tier.family() == TierFamily::ElementalBody && input.resolved_element().is_none() {
        return Err(DomainError::validation(format!(
            "{} needs an element for form '{}'",
            tier, input.form.name
        )));
    }

    Ok(())
}

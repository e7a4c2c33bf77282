//! Game system rules.
//!
//! Only Pathfinder 1st Edition wild shape is implemented. The form source is
//! abstracted behind [`FormProvider`] so the engine can mix built-in templates
//! with user-defined forms.

pub mod pf1e;
mod traits;

pub use pf1e::{
    compute_pf1e, get_size_modifiers, get_tier_for_edl, validate_compute_input, ComputeInput,
    ComputedPlaysheet, Tier, TierFamily,
};
pub use traits::FormProvider;

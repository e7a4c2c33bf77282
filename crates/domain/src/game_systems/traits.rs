//! Seams between the rules engine and where forms come from.

use crate::entities::{Form, FormKind};
use crate::error::DomainError;

/// A source of assumable forms.
///
/// The engine ships a built-in template library; users can layer their own
/// forms over it. Both sides implement this trait so callers can look forms
/// up without caring where they were defined.
///
/// # Example
///
/// ```ignore
/// let provider: &dyn FormProvider = &library;
/// let wolf = provider.get_form("wolf")?;
/// let plants = provider.forms_of_kind(FormKind::Plant);
/// ```
pub trait FormProvider: Send + Sync {
    /// Every form this provider knows, in a stable order.
    fn list_forms(&self) -> Vec<Form>;

    /// Look up one form by id.
    ///
    /// The default implementation scans `list_forms`. Providers backed by an
    /// index should override this.
    fn get_form(&self, id: &str) -> Result<Form, DomainError> {
        self.list_forms()
            .into_iter()
            .find(|form| form.id == id)
            .ok_or_else(|| DomainError::not_found("Form", id))
    }

    /// Forms of a single kind.
    fn forms_of_kind(&self, kind: FormKind) -> Vec<Form> {
        self.list_forms()
            .into_iter()
            .filter(|form| form.kind == kind)
            .collect()
    }

    /// Number of forms available.
    fn form_count(&self) -> usize {
        self.list_forms().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::CreatureSize;

    struct FixedForms(Vec<Form>);

    impl FormProvider for FixedForms {
        fn list_forms(&self) -> Vec<Form> {
            self.0.clone()
        }
    }

    fn provider() -> FixedForms {
        FixedForms(vec![
            Form::new("wolf", "Wolf", FormKind::Animal, CreatureSize::Medium),
            Form::new("treant", "Treant", FormKind::Plant, CreatureSize::Huge),
        ])
    }

    #[test]
    fn default_lookup_finds_by_id() {
        let forms = provider();
        assert_eq!(forms.get_form("treant").map(|f| f.name), Ok("Treant".to_string()));
        assert_eq!(
            forms.get_form("roc"),
            Err(DomainError::not_found("Form", "roc"))
        );
    }

    #[test]
    fn filters_by_kind() {
        let forms = provider();
        assert_eq!(forms.forms_of_kind(FormKind::Plant).len(), 1);
        assert!(forms.forms_of_kind(FormKind::Elemental).is_empty());
        assert_eq!(forms.form_count(), 2);
    }
}

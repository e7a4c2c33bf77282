//! Form library: built-in templates plus user-authored forms.
//!
//! Templates ship inside the binary. Custom forms are read from a JSON file
//! and shadow templates with the same id.

use std::collections::HashSet;
use std::path::Path;

use wildshape_domain::{DomainError, Form, FormProvider};

use crate::config::AppConfig;
use crate::error::LoadError;

const BUILTIN_FORMS: &str = include_str!("../data/forms.json");

/// An ordered set of forms with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSet {
    forms: Vec<Form>,
}

impl FormSet {
    /// The template library compiled into the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json(BUILTIN_FORMS, "built-in templates")
    }

    /// Parse a JSON array of forms. `origin` names the source in errors.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, LoadError> {
        let forms: Vec<Form> =
            serde_json::from_str(json).map_err(|e| LoadError::json(origin, e))?;

        let mut seen = HashSet::new();
        for form in &forms {
            if !seen.insert(form.id.as_str()) {
                return Err(LoadError::DuplicateForm {
                    id: form.id.clone(),
                    origin: origin.to_string(),
                });
            }
        }

        Ok(Self { forms })
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::from_json(&json, &path.display().to_string())
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn find(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.id == id)
    }
}

impl FormProvider for FormSet {
    fn list_forms(&self) -> Vec<Form> {
        self.forms.clone()
    }

    fn get_form(&self, id: &str) -> Result<Form, DomainError> {
        self.find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Form", id))
    }
}

/// Templates with an optional layer of custom forms on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormLibrary {
    templates: FormSet,
    custom: FormSet,
}

impl FormLibrary {
    pub fn new(templates: FormSet) -> Self {
        Self {
            templates,
            custom: FormSet::default(),
        }
    }

    pub fn with_custom(mut self, custom: FormSet) -> Self {
        for form in &custom.forms {
            if self.templates.find(&form.id).is_some() {
                tracing::info!(id = %form.id, "Custom form overrides built-in template");
            }
        }
        self.custom = custom;
        self
    }

    /// Build the library the engine runs with.
    pub fn load(config: &AppConfig) -> Result<Self, LoadError> {
        let library = Self::new(FormSet::builtin()?);
        match &config.custom_forms_path {
            Some(path) => {
                let custom = FormSet::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    count = custom.len(),
                    "Loaded custom forms"
                );
                Ok(library.with_custom(custom))
            }
            None => Ok(library),
        }
    }
}

impl FormProvider for FormLibrary {
    /// Templates in their shipped order, each replaced by a custom form of
    /// the same id, followed by custom forms with new ids.
    fn list_forms(&self) -> Vec<Form> {
        let mut forms: Vec<Form> = self
            .templates
            .forms
            .iter()
            .map(|template| {
                self.custom
                    .find(&template.id)
                    .unwrap_or(template)
                    .clone()
            })
            .collect();
        forms.extend(
            self.custom
                .forms
                .iter()
                .filter(|form| self.templates.find(&form.id).is_none())
                .cloned(),
        );
        forms
    }

    fn get_form(&self, id: &str) -> Result<Form, DomainError> {
        self.custom
            .find(id)
            .or_else(|| self.templates.find(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("Form", id))
    }
}

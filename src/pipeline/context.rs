//! Shared state handed to every step of a pipeline run.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::error::ImagegateError;
use crate::ui::UserInterface;

/// Well-known context keys shared by the runner and its steps.
pub mod keys {
    /// The user interface used for progress and error output.
    pub const UI: &str = "ui";

    /// The destination catalog client.
    pub const CATALOG: &str = "catalog";

    /// The error recorded by a halting step.
    pub const ERROR: &str = "error";
}

/// Mutable context shared by all steps in one pipeline run.
///
/// The UI and catalog are borrowed for the duration of the run; no step owns
/// them. The error slot is written by a step that halts and read by the
/// runner. Anything else steps want to pass along goes in the value bag.
pub struct StepContext<'a> {
    ui: &'a mut dyn UserInterface,
    catalog: &'a dyn Catalog,
    error: Option<ImagegateError>,
    values: HashMap<String, Value>,
}

impl<'a> StepContext<'a> {
    /// Create a context around the run's UI and catalog.
    pub fn new(ui: &'a mut dyn UserInterface, catalog: &'a dyn Catalog) -> Self {
        Self {
            ui,
            catalog,
            error: None,
            values: HashMap::new(),
        }
    }

    /// The user interface for this run.
    pub fn ui(&mut self) -> &mut dyn UserInterface {
        &mut *self.ui
    }

    /// The destination catalog for this run.
    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    /// The recorded error, if any.
    pub fn error(&self) -> Option<&ImagegateError> {
        self.error.as_ref()
    }

    /// Record an error, replacing any earlier one.
    pub fn set_error(&mut self, err: ImagegateError) {
        if let Some(previous) = &self.error {
            tracing::debug!("Replacing recorded error: {}", previous);
        }
        self.error = Some(err);
    }

    /// Remove and return the recorded error.
    pub fn take_error(&mut self) -> Option<ImagegateError> {
        self.error.take()
    }

    /// Check whether an error has been recorded.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Look up a value stored by an earlier step.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a value and decode it as `T`.
    ///
    /// Returns `None` if the key is missing or holds a value of another shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::debug!("Context value '{}' has unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Store a value for later steps, overwriting any previous value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a stored value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Check whether a key is populated.
    ///
    /// The UI and catalog slots are always populated; the error slot only
    /// after a step records one.
    pub fn contains_key(&self, key: &str) -> bool {
        match key {
            keys::UI | keys::CATALOG => true,
            keys::ERROR => self.error.is_some(),
            other => self.values.contains_key(other),
        }
    }

    /// Number of entries in the value bag.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

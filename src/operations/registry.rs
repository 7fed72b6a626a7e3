//! Operation factory keyed by name.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::{error, info, warn};

use super::Operation;
use crate::error::panic_message;

type Constructor = Box<dyn Fn() -> Box<dyn Operation>>;

/// Maps operation names to constructors. A fresh instance is built per use.
#[derive(Default)]
pub struct OperationRegistry {
    constructors: BTreeMap<String, Constructor>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under `name`. See [`OperationRegistry::register_with`].
    pub fn register<T>(&mut self, name: &str) -> bool
    where
        T: Operation + Default + 'static,
    {
        self.register_with(name, || Box::new(T::default()))
    }

    /// Register a constructor under `name`, replacing any earlier one.
    ///
    /// Returns false (and registers nothing) for a blank name.
    pub fn register_with<F>(&mut self, name: &str, constructor: F) -> bool
    where
        F: Fn() -> Box<dyn Operation> + 'static,
    {
        if name.trim().is_empty() {
            error!("Refusing to register operation with an empty name");
            return false;
        }
        if self
            .constructors
            .insert(name.to_string(), Box::new(constructor))
            .is_some()
        {
            warn!(operation = %name, "Operation already registered, overwriting");
        }
        info!(operation = %name, "Registered operation");
        true
    }

    /// Build a new instance of the named operation.
    ///
    /// Unknown names and constructors that panic both yield `None`.
    pub fn create(&self, name: &str) -> Option<Box<dyn Operation>> {
        let Some(constructor) = self.constructors.get(name) else {
            warn!(operation = %name, "Operation not found");
            return None;
        };
        match panic::catch_unwind(AssertUnwindSafe(|| constructor())) {
            Ok(operation) => Some(operation),
            Err(payload) => {
                error!(
                    operation = %name,
                    error = %panic_message(&*payload),
                    "Failed to create operation"
                );
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn list_available(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }
}

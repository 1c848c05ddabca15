// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the theme selection is persisted and mirrored.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Durable storage plus the document root the theme is mirrored onto.
///
/// A browser host maps this to `localStorage` and the root element's
/// dataset.
pub trait ThemeHost {
    /// Reads a persisted value.
    fn load(&self, key: &str) -> Option<String>;

    /// Persists a value.
    fn store(&mut self, key: &str, value: &str);

    /// Sets `data-{name}` on the document root.
    fn set_root_attribute(&mut self, name: &str, value: &str);
}

/// Host for contexts without storage or a document, such as server rendering.
///
/// Loads nothing and drops every write.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHost;

impl ThemeHost for NoHost {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn store(&mut self, _key: &str, _value: &str) {}

    fn set_root_attribute(&mut self, _name: &str, _value: &str) {}
}

/// In-memory host for tests and headless embedding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHost {
    storage: BTreeMap<String, String>,
    root_attributes: BTreeMap<String, String>,
}

impl MemoryHost {
    /// An empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose storage already holds `key = value`.
    #[must_use]
    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        self.storage.insert(key.to_string(), value.to_string());
        self
    }

    /// The value of root attribute `data-{name}`, if set.
    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    /// The persisted value for `key`, if any.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }
}

impl ThemeHost for MemoryHost {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_string(), value.to_string());
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
    }
}

impl<T: ThemeHost + ?Sized> ThemeHost for &mut T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, value: &str) {
        (**self).store(key, value);
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value);
    }
}

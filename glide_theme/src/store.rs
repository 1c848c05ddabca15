// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reactive theme store.

use tracing::debug;

use crate::host::ThemeHost;
use crate::theme::Theme;

/// Storage key holding the persisted theme name.
pub const STORAGE_KEY: &str = "theme";

/// Root data attribute mirroring the current theme (`data-theme`).
pub const ROOT_ATTRIBUTE: &str = "theme";

/// Current theme selection, persisted through a [`ThemeHost`].
///
/// The store keeps a revision counter that increases whenever the current
/// theme changes, so callers can cheaply detect updates between frames.
///
/// ```
/// use glide_theme::{MemoryHost, Theme, ThemeStore};
///
/// let host = MemoryHost::new().with_stored("theme", "dark");
/// let mut store = ThemeStore::new(host);
/// assert_eq!(store.current(), Theme::Dark);
///
/// store.set_theme(Theme::Light);
/// assert_eq!(store.host().stored("theme"), Some("light"));
/// assert_eq!(store.host().root_attribute("theme"), Some("light"));
/// ```
#[derive(Clone, Debug)]
pub struct ThemeStore<H: ThemeHost> {
    host: H,
    current: Theme,
    revision: u64,
}

impl<H: ThemeHost> ThemeStore<H> {
    /// Creates a store, restoring the persisted selection if there is one.
    ///
    /// A persisted name that is not a known theme is ignored and the
    /// default theme is used.
    pub fn new(host: H) -> Self {
        let mut store = Self {
            host,
            current: Theme::default(),
            revision: 0,
        };
        if let Some(saved) = store.host.load(STORAGE_KEY) {
            match saved.parse::<Theme>() {
                Ok(theme) => store.apply(theme),
                Err(_) => debug!(saved = saved.as_str(), "ignoring unknown persisted theme"),
            }
        }
        store
    }

    /// The current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Number of times the current theme has changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects `theme`, persisting it and mirroring it onto the root.
    ///
    /// The host is written even when the theme is unchanged; the revision
    /// only moves on an actual change.
    pub fn set_theme(&mut self, theme: Theme) {
        self.apply(theme);
    }

    /// Switches between light and dark.
    pub fn toggle(&mut self) {
        self.apply(self.current.toggled());
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the store, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn apply(&mut self, theme: Theme) {
        if theme != self.current {
            self.current = theme;
            self.revision += 1;
        }
        self.host.store(STORAGE_KEY, theme.as_str());
        self.host.set_root_attribute(ROOT_ATTRIBUTE, theme.as_str());
        debug!(theme = theme.as_str(), "theme applied");
    }
}

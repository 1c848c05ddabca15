// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glide_theme --heading-base-level=0

//! Glide Theme: a persisted light/dark theme selection.
//!
//! [`ThemeStore`] holds the current [`Theme`], restores it from durable
//! storage on construction, and on every change writes it back under the
//! `"theme"` key and mirrors it onto the document root as `data-theme`.
//! Storage and the document are reached through the [`ThemeHost`] trait so
//! the store runs unchanged in a browser, a desktop shell, or on a server
//! ([`NoHost`]).
//!
//! ```rust
//! use glide_theme::{MemoryHost, Theme, ThemeStore};
//!
//! let mut store = ThemeStore::new(MemoryHost::new());
//! assert_eq!(store.current(), Theme::Light);
//!
//! let seen = store.revision();
//! store.toggle();
//! assert_ne!(store.revision(), seen);
//! assert_eq!(store.host().root_attribute("theme"), Some("dark"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod store;
mod theme;

pub use host::{MemoryHost, NoHost, ThemeHost};
pub use store::{ROOT_ATTRIBUTE, STORAGE_KEY, ThemeStore};
pub use theme::{Theme, UnknownTheme};

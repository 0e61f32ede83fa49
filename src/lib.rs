// SPDX-License-Identifier: MPL-2.0
//! `snake_lingo` provides the localized UI strings for the Snake game.
//!
//! The crate is a small, self-contained string provider: a message table
//! keyed by locale, an active locale the host can switch at runtime, and
//! a fallback locale that serves any key the active locale is missing.
//! Templates use `{name}` placeholders filled at render time.
//!
//! The shipped catalog covers English and Chinese; the game starts in
//! Chinese and falls back to English, matching the original release.
//!
//! ```
//! use snake_lingo::catalog;
//!
//! let mut strings = catalog::default_provider().unwrap();
//! assert_eq!(
//!     strings.resolve_with("score", &[("score", 5.into())]).unwrap(),
//!     "分数: 5"
//! );
//!
//! strings.set_active_locale("en".parse().unwrap());
//! assert_eq!(strings.resolve("title").unwrap(), "Snake Game");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod provider;

pub use error::{Error, Result};
pub use provider::{LocalizedStringProvider, MessageTable, ParamValue};

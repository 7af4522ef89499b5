#![cfg_attr(docsrs, feature(doc_auto_cfg))]
//! Core types and state machines for folio.
//!
//! Everything here is in-memory view state: the generic [`EditableCollection`]
//! that backs every list editor on the profile page, the record schemas it is
//! instantiated with, the profile header, role gating and media handles.
//!
//! [`EditableCollection`]: crate::collection::EditableCollection

mod helper;

pub mod application;
pub mod collection;
pub mod error;
pub mod extension;
pub mod media;
pub mod model;
pub mod profile;
pub mod role;
pub mod state;

pub use error::Error;
pub use helper::excerpt;

/// A TOML value.
pub type TomlValue = toml::Value;

/// A value which is initialized on the first access.
pub type LazyLock<T> = std::sync::LazyLock<T>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;

/// A local date without timezone.
pub type Date = chrono::NaiveDate;

/// A local date and time.
pub type DateTime = chrono::DateTime<chrono::Local>;

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(non_snake_case)]
//! Dioxus components for folio, styled with [Bulma](https://bulma.io) classes.
//!
//! Components follow one convention: a plain function taking a `*Props`
//! struct, with a `class` prop defaulting to the Bulma class of the element.

pub mod application;
pub mod class;
pub mod feedback;
pub mod form;
pub mod icon;
pub mod layout;
pub mod prelude;
pub mod typography;

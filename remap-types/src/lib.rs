//! # Remap Types
//!
//! Keycode composition codec: the mapping between a 16-bit firmware keycode
//! and a typed composition (basic key, modifier combination, layer action,
//! macro, tap dance, unicode and so on).
//!
//! ## Modules
//!
//! - [`kind`] - Partition of the keycode space into composition kinds
//! - [`composition`] - One value type per kind, each encoding itself to a keycode
//! - [`factory`] - Classify a raw keycode and decode it into a composition
//! - [`modifier`] - Modifier sets and their bit layout
//! - [`keycode`] - Named basic and quantum keycodes
//! - [`keymap`] - Keymap entries and the lookup used to resolve embedded keys
//! - [`notation`] - QMK-style rendering of compositions
//!
//! Encoding never fails, out-of-range fields are masked. Decoding a code as
//! the wrong kind is an [`InvalidVariantError`].

#![no_std]

pub mod composition;
pub mod error;
pub mod factory;
pub mod keycode;
pub mod keymap;
pub mod kind;
pub mod modifier;
pub mod notation;

pub use composition::{Composition, KeycodeComposition};
pub use error::InvalidVariantError;
pub use factory::{KeycodeCompositionFactory, decode};
pub use keymap::{KeycodeTable, KeymapEntry, KeymapLookup};
pub use kind::KeycodeCompositionKind;

//! Shared types and utilities for phonetic encoders.
//!
//! This crate holds everything an encoder needs that is not tied to one
//! particular rule set:
//!
//! - [`character`] -- Letter and vowel classification over canonical text
//! - [`normalize`] -- Canonicalization of raw input (NFD, mark stripping, uppercasing)
//! - [`code`] -- The [`PhoneticCode`](code::PhoneticCode) result pair and match levels

pub mod character;
pub mod code;
pub mod normalize;

pub use code::{MatchLevel, PhoneticCode};
pub use normalize::{canonicalize, canonicalize_bytes};

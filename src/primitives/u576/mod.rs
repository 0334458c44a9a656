//! 576-bit unsigned integer primitive
//!
//! This module defines the `U576` type, a fixed-size 576-bit unsigned
//! integer used as the arithmetic substrate of the E521 curve layer.
//!
//! The internal representation is nine 64-bit limbs in little-endian limb
//! order. Conversions to and from bytes are always big-endian, which aligns
//! with the wire formats built on top of it.

mod conv;
mod core;
mod ops;

/// Fixed-size 576-bit unsigned integer.
pub use self::core::U576;

//! Primitive types
//!
//! This module defines the low-level integer substrate shared by the curve
//! arithmetic: a fixed-size 576-bit unsigned integer.
//!
//! Primitives are simple, fixed-size, dependency-light building blocks with
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate a full big-integer library: only
//! the operations needed by the field and scalar arithmetic are provided.
//!
//! 576 bits is the smallest multiple of 64 that holds every value the E521
//! layer manipulates before reduction (field elements and scalars are below
//! 2⁵²¹, KMAC outputs are 512 bits, `4 · KMAC` outputs are 514 bits).

mod u576;

/// Fixed-size 576-bit unsigned integer.
pub use u576::U576;

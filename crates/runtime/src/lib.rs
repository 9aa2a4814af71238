//! Garbage-collected runtime for the lazc lazy-evaluation language.
//!
//! This crate builds on `lazc-core`'s data model with the pieces that
//! need global state or policy: the atom table, the [`Runtime`] handle,
//! the mark-and-sweep collector, the primitive operation set, and the
//! `extern "C"` surface a compiled program links against.
//!
//! Built `crate-type = ["staticlib", "rlib"]`, same as the teacher's
//! `seq-runtime`: `staticlib` so a compiler backend can link this
//! directly into a generated executable, `rlib` so this crate's own
//! tests, benches, and any embedding Rust host can use it as an ordinary
//! dependency.

pub mod atoms;
pub mod ffi;
pub mod gc;
pub mod primitives;
pub mod runtime;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use atoms::AtomTable;
pub use runtime::{Runtime, RuntimeConfig};

pub use lazc_core::{Ar, ArPtr, Choice, Slot, ThunkFn, Value, World, fatal};

pub use ffi::*;

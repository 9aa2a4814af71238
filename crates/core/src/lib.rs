//! Core data model for the lazc lazy-evaluation runtime.
//!
//! This crate has no notion of a garbage collector or of primitive
//! operations — it only defines the shapes those things operate on:
//! [`value::Value`], the activation record ([`ar::Ar`]) and its thunk
//! protocol, and the persistent [`world::World`] used by the
//! choice-driven evaluation style. The collector, the atom table, and the
//! primitive operation set live one crate up, in `lazc-runtime`, which
//! depends on this one.

pub mod ar;
pub mod fatal;
pub mod value;
pub mod world;

pub use ar::{Ar, ArPtr, Slot, ThunkFn};
pub use fatal::fatal;
pub use value::Value;
pub use world::{Choice, World};

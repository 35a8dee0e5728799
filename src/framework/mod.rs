//! Generic actor framework for stateful resources.
//!
//! This module provides the core building blocks for creating type-safe actors
//! that own a single state value and mutate it through custom actions.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that actor-owned state implements
//! - [`ResourceActor`] - Generic actor that owns the state and serializes access to it
//! - [`ResourceClient`] - Type-safe async client used to talk to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;

//! Action resolution.
//!
//! Handlers that mutate game state for accepted actions. Each handler
//! leaves the legal-action set republished (or hands an explicit follow-up
//! action back to the dispatch loop) before returning.

pub mod economy;
pub mod factory;
pub mod maneuver;

//! Gateplane Application Layer
//!
//! Port traits that the service layer calls and the persistence layer
//! implements. The cache decorates these ports without changing their
//! surface, so callers stay cache-agnostic.
pub mod ports;

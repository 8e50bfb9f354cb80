//! Resource relationship graph
//!
//! Domain model, health rules and services that turn observed resource
//! objects and ownership facts into renderable view graphs.

pub mod domain;
pub mod policies;
pub mod services;

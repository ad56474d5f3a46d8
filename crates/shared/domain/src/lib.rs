//! # Domain Models
//!
//! Pure data shared by every CorBas crate: configuration, linguistic token
//! features, semantic codes and pipeline component flags.
//! No I/O, networking or async here.

pub mod components;
pub mod config;
pub mod constants;
pub mod linguistics;
pub mod registry;

//! # Core Module
//!
//! The data a calculation version works on, independent of which version is
//! selected.
//!
//! - **Structure** ([`models`]) - Atom views and the driver's structural types
//! - **Parameters** ([`parameters`]) - Pair-keyed and group-keyed lookup tables
//! - **Chemistry helpers** ([`utils`]) - Element and backbone-role classification

pub mod models;
pub mod parameters;
pub mod utils;

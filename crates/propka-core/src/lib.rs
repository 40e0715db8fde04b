//! # propka-versions
//!
//! Algorithm-version dispatch and hydrogen-bond parameter resolution for
//! empirical protein pKa prediction.
//!
//! A pKa run asks the same questions of every structure: how buried is a group,
//! how strongly do two groups hydrogen-bond, what is their Coulomb interaction.
//! The answers depend on which calculation version the run selected. This crate
//! binds those answers once, at construction, behind a single facade.
//!
//! ## Layout
//!
//! - **[`core`]: The Vocabulary.** The atom view read by parameter resolution,
//!   the [`core::models::model::MolecularModel`] trait naming a driver's
//!   structural types, and the [`core::parameters::ParameterSet`] tables.
//!
//! - **[`version`]: The Facade.** [`version::Version`] binds one
//!   [`version::kind::VersionKind`] to a parameter set and an
//!   [`version::interactions::InteractionModels`] catalog, resolves
//!   hydrogen-bond parameters by the kind's policy, and reports steps the kind
//!   does not implement as [`version::error::VersionError::UnboundOperation`].

pub mod core;
pub mod version;

//! # Core Models Module
//!
//! The structural vocabulary shared between the version layer and the
//! calculation driver that owns the molecule.
//!
//! ## Key Components
//!
//! - [`atom`] - The [`atom::AtomView`] trait read by parameter resolution, and a
//!   self-contained [`atom::Atom`] record implementing it
//! - [`model`] - The [`model::MolecularModel`] trait naming the driver's group,
//!   conformation and container types
//!
//! ```ignore
//! use nalgebra::Point3;
//! use propka_versions::core::models::atom::{Atom, RecordType};
//! use std::sync::Arc;
//!
//! let nitrogen = Atom::new("N1", "N", Point3::origin()).with_record_type(RecordType::Hetatm);
//! let hydrogen = Atom::new("H1", "H", Point3::new(1.0, 0.0, 0.0))
//!     .with_record_type(RecordType::Hetatm)
//!     .bonded_to(Arc::new(nitrogen));
//! ```

pub mod atom;
pub mod model;

//! Manifest module: SCP manifest model and loading
//!
//! Defines the typed shape of an `scp.yaml` file and the loader that
//! parses and validates one.

pub mod loader;
pub mod model;

pub use loader::{load_manifest, parse_manifest, validate, FieldError, LoadError};
pub use model::{
    Capability, Classification, Contact, Dependency, Manifest, Ownership, SourcedManifest, System,
};

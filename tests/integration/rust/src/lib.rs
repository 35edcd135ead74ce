//! Integration test suite for the type classification workspace
//!
//! This crate verifies the components work together across crate
//! boundaries: values → classification → analysis → checks → reports.

/// Re-export components for test convenience
pub mod components {
    pub use check_harness;
    pub use core_types;
    pub use type_inspect;
    pub use typeof_cli;
}

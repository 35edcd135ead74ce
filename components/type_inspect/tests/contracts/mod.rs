//! Contract tests for type_inspect
//!
//! Properties that must hold for any input sequence.

mod analysis_invariants;

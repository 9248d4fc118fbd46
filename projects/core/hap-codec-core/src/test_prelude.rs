//! Common test imports for HAP core tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{format, string::String, string::ToString, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

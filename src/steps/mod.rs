//! Concrete pipeline steps.
//!
//! - [`PreValidateStep`] - refuse to build when the destination image name
//!   is already taken

pub mod prevalidate;

pub use prevalidate::PreValidateStep;

pub mod analyze;
pub(crate) mod common;
pub mod fraud;
pub mod opportunities;
pub mod patterns;

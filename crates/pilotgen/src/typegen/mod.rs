//! Type declaration generation.

pub mod luau;

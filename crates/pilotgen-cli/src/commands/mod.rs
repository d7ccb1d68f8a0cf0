pub mod check;
pub mod defs;
pub mod parts;
pub mod report;

#[cfg(test)]
mod report_tests;

//! fibmemo library: HTTP adapter around the memoized Fibonacci calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod routes;
pub mod version;

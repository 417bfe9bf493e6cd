//! Models backing the server runtime.

pub mod config;

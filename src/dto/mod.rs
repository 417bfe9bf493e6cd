//! DTO modules that bridge services with templates and APIs.

pub mod api;
pub mod band;
pub mod main;

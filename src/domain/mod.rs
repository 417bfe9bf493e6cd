//! Domain aggregates exposed by the band directory service layer.

pub mod band;
pub mod person;
pub mod preset;
pub mod single;
pub mod sort;
pub mod types;

//! Application Domain

pub mod products;

//! Shared application domain modules for the product catalog.

pub mod domain;

#[cfg(test)]
mod test;

//! Test Support

pub(crate) mod helpers;

#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_inception,
    clippy::struct_excessive_bools
)]

pub mod api;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

pub mod base_setup;
pub mod constants;

pub mod browser;
pub mod error;

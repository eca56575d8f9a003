//! Console walkthrough of the inventory system.

pub mod config;
pub mod walkthrough;

pub use config::DemoConfig;
pub use walkthrough::run;

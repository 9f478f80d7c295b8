pub mod config;
pub mod constants;
pub mod demo;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;

pub mod config;
pub mod logging;

pub mod engine;
pub mod naming;
pub mod sink;
pub mod source;
pub mod validate;

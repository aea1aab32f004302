pub mod args;
pub mod calc;
pub mod chart;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod forms;
pub mod logging;
pub mod server;
pub mod util;

pub mod application_manager;
pub mod cli;
pub mod command;
pub mod config;
pub mod defaults;
pub mod fs;
pub mod logging;
pub mod resource;

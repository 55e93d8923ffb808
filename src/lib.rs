// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod error;
pub mod scrape;

pub mod csv;
pub mod file;
pub mod params;
pub mod record;
pub mod runner;
pub mod store;
pub mod teams;

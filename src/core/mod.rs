//! Core translation engine module

pub mod config;
pub mod errors;
pub mod languages;
pub mod models;
pub mod providers;
pub mod resolver;

//! Conversational assistant module

pub mod engine;
pub mod generative;
pub mod interpreter;
pub mod responses;

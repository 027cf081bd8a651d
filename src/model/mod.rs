// src/model/mod.rs

pub mod error;
pub mod inputs;

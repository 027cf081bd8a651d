// src/analysis/mod.rs

pub mod calculator;
pub mod curve;

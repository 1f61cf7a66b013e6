// src/handlers/mod.rs

pub mod archetype;
pub mod quiz;
pub mod results;

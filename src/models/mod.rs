// src/models/mod.rs

pub mod archetype;
pub mod category;
pub mod question;
pub mod submission;

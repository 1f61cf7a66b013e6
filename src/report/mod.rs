// src/report/mod.rs

//! Read-only renderings of a `ScoreResult`: profile bars, share links and
//! the results email.

pub mod bars;
pub mod email;
pub mod share;

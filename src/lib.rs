//! mowplan - Coverage-path planning for autonomous lawn mowers

pub mod config;
pub mod coverage;
pub mod domain;
pub mod geometry;
pub mod patterns;
pub mod planner;
pub mod yardfile;

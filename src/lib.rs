//! Albion Mapper - Roads of Avalon portal tracking
//!
//! This crate loads the static zone topology from the game data dump and
//! tracks the time-limited portals players report between zones, sweeping
//! them once they close.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

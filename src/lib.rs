//! Expert Directory - Browsable directory of university research experts
//!
//! This crate loads a per-university list of expert profiles and a flat
//! research-tag taxonomy, then serves them as filterable listing and detail
//! pages plus a read-only JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

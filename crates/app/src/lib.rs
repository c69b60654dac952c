//! `stocksync-app` — process wiring for the reconciliation job.
//!
//! Owns everything the driver must not know about: environment-sourced
//! configuration, the interval scheduler, and the health/status web
//! surface.

pub mod config;
pub mod scheduler;
pub mod web;

pub use config::Config;
pub use scheduler::{Scheduler, SchedulerStatus};

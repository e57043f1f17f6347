#![forbid(unsafe_code)]

//! Core domain model and business logic for the BMI calculator.
//!
//! This crate provides:
//! - Domain types (measurements, results, categories)
//! - The BMI engine (validation, computation, classification)
//! - Service traits for notifications, sharing and camera capture
//! - The presenter that wires the engine to those services
//! - Configuration and logging setup shared by the binaries

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod engine;
pub mod services;
pub mod presenter;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use engine::{classify, compute, compute_measurement, raw_bmi, round_bmi, validate};
pub use services::{CameraService, NotificationService, ServiceError, ServiceResult, ShareService};
pub use presenter::Presenter;

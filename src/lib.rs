//! proctor-jobs: build, push, and register proctor job images from CI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use domain::{AppError, ImageReference, JobMetadata};

//! Detector-icons - device, browser, and OS metadata export and icon tooling
//!
//! This library crate exposes the core functionality for integration testing.

pub mod check;
pub mod config;
pub mod ignore_list;
pub mod metadata;

//! Pricing and profile completion engines for the Rekro rental marketplace.
//!
//! Everything under [`pricing`] and [`profile`] is pure: values in, values out,
//! no I/O. The [`config`], [`error`] and [`telemetry`] modules carry the ambient
//! plumbing shared with the HTTP service.

pub mod config;
pub mod error;
pub mod pricing;
pub mod profile;
pub mod telemetry;

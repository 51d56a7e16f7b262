//! Buildbot builder status badge service.
//!
//! Serves a small SVG (or JSON) badge reporting the latest build result of a
//! named builder on any Buildbot instance, resolved live from the instance's
//! query API. One badge route plus a health endpoint; no persistence.

pub mod badge;
pub mod config;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod services;

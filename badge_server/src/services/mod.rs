//! Badge services — upstream fetch and status resolution.

pub mod buildbot_service;

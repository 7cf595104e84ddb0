//! Handler modules, one per API resource.

pub mod appointments;
pub mod auth;
pub mod departments;
pub mod doctors;
pub mod patients;
pub mod records;
pub mod stats;

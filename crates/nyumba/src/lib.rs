//! Domain core for the Nyumba property marketplace.
//!
//! Business logic lives in workflow modules behind repository traits so the
//! services can be exercised against in-memory fakes as well as the hosted
//! backend adapters wired in by the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

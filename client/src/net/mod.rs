//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the request/response interceptors, `api` names the account
//! endpoints, `types` defines their bodies and `error` the failure modes.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

//! Networking modules for the remote document API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the upload and question requests, and `types` defines the
//! JSON wire schema and the error type those requests return.

pub mod api;
pub mod types;

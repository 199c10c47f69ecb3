//! HTTP access to the Plane REST API.
//!
//! [`PlaneClient`] is the single place where URLs are built, the API key is
//! attached and upstream failures are turned into [`PlaneError`].

pub mod error;
mod plane_client;


pub use error::{PlaneError, PlaneResult};
pub use plane_client::{
    API_KEY_HEADER, API_PREFIX, Method, PlaneClient, api_base_url, install_crypto_provider,
};

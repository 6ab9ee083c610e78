/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod api;
pub mod client;
pub mod error;
pub mod orders;
pub mod params;
pub mod public;
pub mod wallet;

pub use error::{Result, ValrError};

pub use api::{PrivateApi, PublicApi};
pub use client::{ClientConfig, ValrClient, DEFAULT_BASE_URL};

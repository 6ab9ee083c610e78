/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public VALR adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{generate_signature, Credentials, RequestSigner};

// Re-export commonly used types from http
pub use http::{ClientConfig, PrivateApi, PublicApi, Result, ValrClient, ValrError, DEFAULT_BASE_URL};

// Re-export all types
pub use types::*;

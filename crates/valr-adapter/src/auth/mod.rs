/*
[INPUT]:  API key/secret pairs and outgoing HTTP requests
[OUTPUT]: Credentials and HMAC-SHA512 request signatures
[POS]:    Auth layer - API key authentication
[UPDATE]: When changing credential sources or signing rules
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{generate_signature, RequestSigner};

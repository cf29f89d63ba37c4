pub mod error;
pub mod factory;
pub mod header;
pub mod jwks;
pub mod verifier;

pub use error::AuthError;
pub use factory::build_verifier;
pub use header::extract_bearer_token;
pub use jwks::JwksClient;
pub use verifier::{Claims, TokenVerifier, authorize};

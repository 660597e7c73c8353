//! Authentication module
//!
//! Supports: Bearer token, Basic, API key header, Custom Headers
//!
//! Credentials are static; token exchange with an identity provider is left to
//! the caller, who hands the resulting bearer token to [`AuthConfig::Bearer`].

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;

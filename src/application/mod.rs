/// OAuth2 client-credentials token fetching
pub mod auth;
/// Token-then-resource client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one per endpoint
pub mod interfaces;

/// Health measurement payloads
pub mod measurement;

/// Country lookup interface
pub mod countries;
/// Identify interface
pub mod identify;
/// Measurement submission interface
pub mod measurements;

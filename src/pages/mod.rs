pub mod fraud_cycles;
pub mod not_found;

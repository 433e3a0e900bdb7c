//! Outbound adapters

mod exchange;

pub use exchange::RateConverter;

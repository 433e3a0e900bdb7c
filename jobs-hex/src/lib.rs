//! # Jobs Hex
//!
//! Application service layer and converter adapter for the job salary service.
//!
//! ## Architecture
//!
//! - `service/` - Derivation service (composes lookups and conversions)
//! - `outbound/` - Converter adapter over the fixed exchange rate table
//!
//! The service is generic over `R: JobRepository` and `C: CurrencyConverter`,
//! allowing different adapters to be injected.

pub mod outbound;
pub mod service;


pub use outbound::RateConverter;
pub use service::JobDerivationService;

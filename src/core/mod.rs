//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod karat;
pub mod log;
pub mod quote;

// Re-export main types for cleaner imports
pub use currency::{ExchangeRateProvider, ExchangeRateTable};
pub use error::FetchError;
pub use karat::{Karat, KaratPrice, KaratPriceSet, convert_to_karat_prices};
pub use quote::{GoldQuote, SpotPriceProvider};

//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

mod private;

pub use account::AccountEndpoints;
pub use market::{MarketEndpoints, PublicAction};
pub use trading::TradingEndpoints;

pub(crate) use private::PrivateApi;

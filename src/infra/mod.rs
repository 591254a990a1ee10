pub mod market;
pub mod schedule;

#[allow(unused_imports)]
pub use market::{MarketClient, MarketClientError};
#[allow(unused_imports)]
pub use schedule::{RefreshSchedule, REFRESH_INTERVAL, REFRESH_THROTTLE};

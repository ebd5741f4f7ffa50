pub mod base_rpc;
pub mod client;
pub mod neynar;
pub mod resilience;

pub use base_rpc::BaseRpcClient;
pub use client::{OnchainProvider, ProfileLookup, StatsProvider};
pub use neynar::NeynarClient;
pub use resilience::{retry_with_backoff, RetryConfig};

#[cfg(test)]
pub use client::{MockOnchainProvider, MockStatsProvider};

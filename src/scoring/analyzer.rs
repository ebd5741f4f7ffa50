use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    config::Settings,
    models::{AuraResult, ProfileStats, Result},
    providers::{OnchainProvider, ProfileLookup, StatsProvider},
    scoring::AuraEngine,
};

/// A scored profile together with the stats it was computed from.
#[derive(Debug, Clone)]
pub struct ProfileAura {
    pub stats: ProfileStats,
    pub aura: AuraResult,
}

/// Fetches a profile's stats and runs them through the engine.
pub struct ProfileAnalyzer {
    stats_provider: Arc<dyn StatsProvider>,
    onchain_provider: Option<Arc<dyn OnchainProvider>>,
    engine: AuraEngine,
}

impl ProfileAnalyzer {
    pub fn new(
        stats_provider: Arc<dyn StatsProvider>,
        onchain_provider: Option<Arc<dyn OnchainProvider>>,
        engine: AuraEngine,
    ) -> Self {
        Self {
            stats_provider,
            onchain_provider,
            engine,
        }
    }

    pub fn from_settings(
        stats_provider: Arc<dyn StatsProvider>,
        onchain_provider: Option<Arc<dyn OnchainProvider>>,
        settings: &Settings,
    ) -> Self {
        let engine = AuraEngine::new(settings.scoring.weights.clone(), settings.scoring.caps.clone());
        Self::new(stats_provider, onchain_provider, engine)
    }

    pub fn engine(&self) -> &AuraEngine {
        &self.engine
    }

    pub async fn analyze(&self, lookup: &ProfileLookup) -> Result<ProfileAura> {
        info!("Analyzing {} via {}", lookup, self.stats_provider.service());

        let mut stats = self.stats_provider.fetch_profile(lookup).await?;

        if let Some(onchain) = &self.onchain_provider {
            if stats.verified_addresses.is_empty() {
                info!("@{} has no verified addresses, skipping {}", stats.username, onchain.chain());
            } else {
                match onchain.transaction_count(&stats.verified_addresses).await {
                    Ok(count) => {
                        info!("@{} has {} transactions on {}", stats.username, count, onchain.chain());
                        stats.base_tx_count = Some(count);
                    }
                    Err(e) => {
                        warn!("Failed to fetch {} activity for @{}: {}", onchain.chain(), stats.username, e);
                    }
                }
            }
        }

        let aura = self.engine.compute(&stats.to_inputs());
        info!("@{} scored {} ({})", stats.username, aura.score, aura.archetype);

        Ok(ProfileAura { stats, aura })
    }

    pub async fn analyze_batch(&self, lookups: &[ProfileLookup]) -> Vec<Result<ProfileAura>> {
        info!("Analyzing {} profiles", lookups.len());

        let mut results = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            results.push(self.analyze(lookup).await);
        }
        results
    }
}

use clap::{Parser, Subcommand};
use aura_scorer::{
    models::{AuraInputs, AuraResult, ProfileStats},
    providers::{BaseRpcClient, NeynarClient, OnchainProvider, ProfileLookup},
    scoring::{AuraEngine, ProfileAnalyzer},
    config::Settings,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod tui_main;

#[derive(Parser)]
#[clap(name = "aura-scorer")]
#[clap(about = "Read the social aura of a Farcaster profile", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score raw metrics without touching the network
    Score {
        /// Top-level posts in the window
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        casts: i64,

        /// Replies in the window
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        replies: i64,

        /// Likes + recasts received
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        reactions: i64,

        /// Follower count
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        followers: i64,

        /// Fraction of long-form casts (0-1)
        #[clap(long)]
        long_ratio: Option<f64>,

        /// Fraction of casts with media (0-1)
        #[clap(long)]
        media_ratio: Option<f64>,

        /// Base transaction count
        #[clap(long, allow_negative_numbers = true)]
        base_tx: Option<i64>,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Fetch a profile from Neynar and score it
    Lookup {
        /// Username (with or without @) or fid
        profile: String,

        /// Skip the Base transaction count
        #[clap(long)]
        no_onchain: bool,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Launch interactive TUI
    Tui {
        /// Profile to read on launch
        profile: Option<String>,
    },
}

fn init_logging(settings: &Settings, quiet: bool) {
    if quiet {
        // Keep log lines from corrupting the alternate screen
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter(EnvFilter::new("off"))
            .init();
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_analyzer(settings: &Settings, with_onchain: bool) -> anyhow::Result<ProfileAnalyzer> {
    let neynar = Arc::new(NeynarClient::new(&settings.neynar, settings.retry.clone())?);

    let onchain: Option<Arc<dyn OnchainProvider>> = if with_onchain && settings.base.enabled {
        Some(Arc::new(BaseRpcClient::new(&settings.base, settings.retry.clone())?))
    } else {
        None
    };

    Ok(ProfileAnalyzer::from_settings(neynar, onchain, settings))
}

fn print_aura(aura: &AuraResult, stats: Option<&ProfileStats>) {
    println!("\n=== {} {} ===", aura.emoji, aura.label);
    if let Some(stats) = stats {
        match &stats.display_name {
            Some(name) => println!("Profile: {} (@{}, fid {})", name, stats.username, stats.fid),
            None => println!("Profile: @{} (fid {})", stats.username, stats.fid),
        }
        println!("Window: {} casts, {} followers", stats.casts.len(), stats.followers);
    }
    println!("Score: {}/100", aura.score);
    println!("{}", aura.description);
    println!("\nBreakdown:");
    for (dimension, value) in aura.breakdown.dimensions() {
        println!("  {:<9} {:>3}", dimension, value);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|e| {
        eprintln!("Using default settings: {}", e);
        Settings::default()
    });

    init_logging(&settings, matches!(cli.command, Commands::Tui { .. }));

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Score {
            casts,
            replies,
            reactions,
            followers,
            long_ratio,
            media_ratio,
            base_tx,
            json,
        } => {
            let inputs = AuraInputs {
                casts,
                replies,
                reactions_received: reactions,
                followers,
                long_cast_ratio: long_ratio,
                media_cast_ratio: media_ratio,
                base_tx_count: base_tx,
            };
            let engine = AuraEngine::new(settings.scoring.weights.clone(), settings.scoring.caps.clone());
            let aura = engine.compute(&inputs);

            if json {
                println!("{}", serde_json::to_string_pretty(&aura)?);
            } else {
                print_aura(&aura, None);
            }
        }

        Commands::Lookup { profile, no_onchain, json } => {
            let lookup = ProfileLookup::parse(&profile)?;
            let analyzer = build_analyzer(&settings, !no_onchain)?;

            info!("Reading aura for {}", lookup);
            let result = analyzer.analyze(&lookup).await?;

            if json {
                let payload = serde_json::json!({
                    "fid": result.stats.fid,
                    "username": result.stats.username,
                    "inputs": result.stats.to_inputs(),
                    "aura": result.aura,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print_aura(&result.aura, Some(&result.stats));
            }
        }

        Commands::Tui { profile } => {
            let analyzer = build_analyzer(&settings, true)?;
            tui_main::run_tui(analyzer, profile).await?;
        }
    }

    Ok(())
}

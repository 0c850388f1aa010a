use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::config::SettingsOverrides;
use crate::freshness::domain::TimeRange;
use crate::freshness::policies::View;

/// Keep admin dashboard data fresh from the command line
#[derive(Parser, Debug)]
#[command(name = "dashboard-sync")]
#[command(version)]
#[command(about = "Keep admin dashboard data fresh: scheduled refresh, push updates and a live activity feed", long_about = None)]
pub struct Args {
    /// Path to a config file (YAML, or TOML with a .toml extension)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the admin REST API (overrides the config file)
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Keep a view fresh until Ctrl-C, printing every new snapshot
    Watch(WatchArgs),
    /// Run one fetch cycle and print the snapshot
    Fetch(FetchArgs),
    /// Print simulated live activity events
    Feed(FeedArgs),
    /// Manage payment gateways
    #[command(subcommand)]
    Gateways(GatewayCommand),
    /// Inspect shipping partners
    #[command(subcommand)]
    Shipping(ShippingCommand),
}

/// View and time range selection shared by `watch` and `fetch`
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Dashboard view: analytics, shipping or overview
    #[arg(short, long)]
    pub view: Option<View>,

    /// Sales time range: 7d, 30d, 90d or 1y
    #[arg(short, long)]
    pub range: Option<TimeRange>,
}

#[derive(ClapArgs, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Refresh interval in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Do not connect to the push channel
    #[arg(long = "no-push")]
    pub no_push: bool,

    /// Also print the simulated live activity feed
    #[arg(long)]
    pub feed: bool,
}

#[derive(ClapArgs, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct FeedArgs {
    /// Number of events to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Subcommand, Debug)]
pub enum GatewayCommand {
    /// List configured payment gateways
    List,
    /// Create a payment gateway
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Provider identifier (e.g. razorpay, stripe)
        #[arg(long)]
        provider: String,
        /// Create the gateway disabled
        #[arg(long)]
        disabled: bool,
        /// Operating mode: test or live
        #[arg(long)]
        mode: Option<String>,
    },
    /// Update a payment gateway
    Update {
        /// Gateway id
        id: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// Enable or disable the gateway
        #[arg(long)]
        enabled: Option<bool>,
        /// New operating mode: test or live
        #[arg(long)]
        mode: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShippingCommand {
    /// List shipping partners
    Partners {
        /// Only show active partners
        #[arg(long)]
        active: bool,
    },
    /// Check whether a route is serviceable
    Check {
        /// Pickup pincode
        #[arg(long)]
        pickup: String,
        /// Delivery pincode
        #[arg(long)]
        delivery: String,
        /// Parcel weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Cash on delivery
        #[arg(long)]
        cod: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Settings overrides implied by the global flags and the subcommand
    pub fn overrides(&self) -> SettingsOverrides {
        let mut overrides = SettingsOverrides {
            api_base_url: self.api_url.clone(),
            ..Default::default()
        };
        match &self.command {
            Command::Watch(watch) => {
                overrides.view = watch.view.view;
                overrides.time_range = watch.view.range;
                overrides.refresh_interval_secs = watch.interval;
                overrides.disable_push = watch.no_push;
            }
            Command::Fetch(fetch) => {
                overrides.view = fetch.view.view;
                overrides.time_range = fetch.view.range;
            }
            Command::Feed(_) | Command::Gateways(_) | Command::Shipping(_) => {}
        }
        overrides
    }
}

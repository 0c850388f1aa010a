use chrono::Utc;
use dashboard_sync::adapters::outbound::console::StderrProgressReporter;
use dashboard_sync::adapters::outbound::formatters::TextFormatter;
use dashboard_sync::adapters::outbound::network::{HttpDashboardApi, WebSocketPushChannel};
use dashboard_sync::adapters::outbound::random::RandomEventGenerator;
use dashboard_sync::application::dto::{FetchSnapshotRequest, OutputFormat};
use dashboard_sync::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dashboard_sync::application::store::SnapshotStore;
use dashboard_sync::application::use_cases::{
    CoordinatorSettings, DataFreshnessCoordinator, EventFeedReader, FetchSnapshotUseCase,
    ManagePaymentGatewaysUseCase, ShippingPartnersUseCase, SimulatedEventFeed,
};
use dashboard_sync::cli::{Args, Command, FetchArgs, GatewayCommand, ShippingCommand, WatchArgs};
use dashboard_sync::config::{load_settings, Settings};
use dashboard_sync::freshness::domain::{
    LiveEvent, NewPaymentGateway, PaymentGatewayUpdate, ServiceabilityQuery,
};
use dashboard_sync::freshness::services::DEFAULT_EVENT_CAPACITY;
use dashboard_sync::ports::inbound::RefreshPort;
use dashboard_sync::ports::outbound::PushChannel;
use dashboard_sync::shared::error::ExitCode;
use dashboard_sync::shared::logging::init_logging;
use dashboard_sync::shared::Result;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // clap exits with 2 on invalid arguments and 0 on --help/--version.
    let args = Args::parse_args();
    init_logging(args.log_json);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let working_dir = std::env::current_dir()?;
    let settings = load_settings(args.config.as_deref(), &working_dir, &args.overrides())?;

    match args.command {
        Command::Watch(watch_args) => watch(&settings, watch_args).await,
        Command::Fetch(fetch_args) => fetch(&settings, fetch_args).await,
        Command::Feed(feed_args) => feed(feed_args.count),
        Command::Gateways(command) => gateways(&settings, command).await,
        Command::Shipping(command) => shipping(&settings, command).await,
    }
}

fn api_client(settings: &Settings) -> Result<Arc<HttpDashboardApi>> {
    Ok(Arc::new(HttpDashboardApi::new(
        &settings.api_base_url,
        settings.request_timeout,
    )?))
}

async fn fetch(settings: &Settings, args: FetchArgs) -> Result<ExitCode> {
    let use_case = FetchSnapshotUseCase::new(api_client(settings)?, StderrProgressReporter::new());
    let response = use_case
        .execute(FetchSnapshotRequest::new(settings.view, settings.time_range))
        .await;

    let presenter_type = PresenterType::from_output(args.output);
    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format, presenter_type.supports_color());
    let output = formatter.format(&response.snapshot)?;
    PresenterFactory::create(presenter_type).present(&output)?;

    if response.is_degraded() {
        Ok(ExitCode::DegradedData)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn watch(settings: &Settings, args: WatchArgs) -> Result<ExitCode> {
    let push: Option<Arc<dyn PushChannel>> = if settings.push_enabled {
        Some(Arc::new(WebSocketPushChannel::new(settings.push_url.as_str())?))
    } else {
        None
    };
    let store = Arc::new(SnapshotStore::new(settings.time_range));
    let coordinator_settings = CoordinatorSettings::new(settings.view)
        .with_time_range(settings.time_range)
        .with_refresh_interval(settings.refresh_interval);
    let handle =
        DataFreshnessCoordinator::start(api_client(settings)?, push, store, coordinator_settings)?;

    let (feed_task, mut feed_reader) = if args.feed {
        let feed = SimulatedEventFeed::new(RandomEventGenerator::new(), DEFAULT_EVENT_CAPACITY)?;
        let (task, reader) = feed.start(settings.feed_interval)?;
        (Some(task), Some(reader))
    } else {
        (None, None)
    };

    let color = PresenterType::Stdout.supports_color();
    let formatter = FormatterFactory::create(OutputFormat::Text, color);
    let event_formatter = if color {
        TextFormatter::new()
    } else {
        TextFormatter::plain()
    };
    let presenter = PresenterFactory::create(PresenterType::Stdout);
    let mut revisions = handle.subscribe();

    eprintln!(
        "👀 Watching the {} view ({}), refreshing every {}s. Press Ctrl-C to stop.",
        settings.view,
        settings.time_range,
        settings.refresh_interval.as_secs()
    );

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                result?;
                eprintln!("\n🛑 Stopping...");
                break;
            }
            changed = revisions.changed() => {
                if changed.is_err() {
                    break;
                }
                let output = formatter.format(&handle.snapshot())?;
                presenter.present(&output)?;
            }
            Some(events) = next_events(&mut feed_reader) => {
                if let Some(event) = events.first() {
                    presenter.present(&format!("{}\n", event_formatter.format_event(event)))?;
                }
            }
        }
    }

    if let Some(task) = feed_task {
        task.shutdown().await;
    }
    handle.shutdown().await;
    Ok(ExitCode::Success)
}

/// Waits for the next feed update; never resolves when the feed is off or closed.
async fn next_events(reader: &mut Option<EventFeedReader>) -> Option<Vec<LiveEvent>> {
    let Some(active) = reader.as_mut() else {
        return std::future::pending().await;
    };
    if active.changed().await {
        Some(active.latest())
    } else {
        *reader = None;
        None
    }
}

fn feed(count: usize) -> Result<ExitCode> {
    let mut feed = SimulatedEventFeed::new(RandomEventGenerator::new(), DEFAULT_EVENT_CAPACITY)?;
    let presenter_type = PresenterType::Stdout;
    let formatter = if presenter_type.supports_color() {
        TextFormatter::new()
    } else {
        TextFormatter::plain()
    };

    let mut output = String::new();
    for _ in 0..count {
        let event = feed.tick(Utc::now());
        output.push_str(&formatter.format_event(&event));
        output.push('\n');
    }
    PresenterFactory::create(presenter_type).present(&output)?;
    Ok(ExitCode::Success)
}

async fn gateways(settings: &Settings, command: GatewayCommand) -> Result<ExitCode> {
    let use_case = ManagePaymentGatewaysUseCase::new(api_client(settings)?);

    let value = match command {
        GatewayCommand::List => serde_json::to_value(use_case.list().await?)?,
        GatewayCommand::Create {
            name,
            provider,
            disabled,
            mode,
        } => {
            let gateway = NewPaymentGateway::new(name, provider, !disabled, mode)?;
            serde_json::to_value(use_case.create(gateway).await?)?
        }
        GatewayCommand::Update {
            id,
            name,
            enabled,
            mode,
        } => {
            let update = PaymentGatewayUpdate {
                name,
                enabled,
                mode,
            };
            serde_json::to_value(use_case.update(&id, update).await?)?
        }
    };

    print_json(&value)
}

async fn shipping(settings: &Settings, command: ShippingCommand) -> Result<ExitCode> {
    let use_case = ShippingPartnersUseCase::new(api_client(settings)?);

    let value = match command {
        ShippingCommand::Partners { active } => serde_json::to_value(use_case.list(active).await?)?,
        ShippingCommand::Check {
            pickup,
            delivery,
            weight,
            cod,
        } => {
            let query = ServiceabilityQuery::new(pickup, delivery, weight, cod)?;
            serde_json::to_value(use_case.check(&query).await?)?
        }
    };

    print_json(&value)
}

fn print_json(value: &serde_json::Value) -> Result<ExitCode> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    PresenterFactory::create(PresenterType::Stdout).present(&output)?;
    Ok(ExitCode::Success)
}

mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mastery_core::store::AppState;
use services::{AppServices, Clock, DemoApi, ServicesConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use config::{Config, DEFAULT_LOG_FILTER, Invocation, parse_args, print_usage};

struct DesktopApp {
    initial_state: AppState,
    demo_api: Arc<DemoApi>,
}

impl UiApp for DesktopApp {
    fn initial_state(&self) -> AppState {
        self.initial_state.clone()
    }

    fn demo_api(&self) -> Arc<DemoApi> {
        Arc::clone(&self.demo_api)
    }
}

/// `filter` has already been checked by the config layer.
fn init_logging(filter: &str) {
    let env_filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let base = Config::from_env(|key| std::env::var(key).ok());
    let config = match parse_args(std::env::args().skip(1), base).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Launch(config) => config,
    };

    init_logging(&config.log_filter);
    for entry in &config.ignored_env {
        tracing::warn!(%entry, "ignoring unreadable environment value");
    }

    let services = AppServices::build(ServicesConfig {
        clock: Clock::system(),
        latency_ms: config.latency_ms,
    })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        initial_state: AppState::new(config.theme, config.language),
        demo_api: Arc::clone(&services.api),
    });
    let context = build_app_context(&app);
    tracing::info!(theme = %config.theme, language = %config.language, "launching desktop window");

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Mastery Hub")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

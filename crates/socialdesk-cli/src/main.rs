//! socialdesk - terminal front-end for the social media manager.
//!
//! Every command runs through the core `ApiClient`, so an expired access
//! token is renewed transparently. When renewal is impossible the session
//! is torn down and the user is told to sign in again.

mod cli;
mod commands;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use socialdesk_core::auth::{MemoryTokenStore, TokenStore};
use socialdesk_core::cache::CacheManager;
use socialdesk_core::notify::{ToastKind, ToastStore};
use socialdesk_core::{ApiClient, ApiError, Config, Session};

use cli::Cli;
use commands::Context as CommandContext;

/// Log file prefix inside `log_dir`
const LOG_FILE_PREFIX: &str = "socialdesk.log";

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level (default `warn`). When `log_dir` is
/// configured, a daily rolling file gets the same events.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr = fmt::layer().with_writer(io::stderr);

    match config.log_dir {
        Some(ref dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(stderr)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stderr).with(filter).init();
            None
        }
    }
}

fn terminal_navigator(route: &str) {
    debug!(route, "Redirecting to login");
    eprintln!("Your session has expired. Run `socialdesk login` to sign in again.");
}

fn build_client(cli: &Cli, config: &Config) -> Result<ApiClient> {
    let store: Arc<dyn TokenStore> = if cli.ephemeral {
        Arc::new(MemoryTokenStore::new())
    } else {
        config.token_store()?
    };
    let cache = CacheManager::new(config.cache_dir()?)?;

    let session = Session::new(store)
        .with_cache(cache)
        .with_navigator(Arc::new(terminal_navigator));

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.effective_base_url());
    info!(base_url = %base_url, "Using API");
    ApiClient::with_timeout(&base_url, Arc::new(session), config.request_timeout())
        .context("Failed to create HTTP client")
}

fn print_toasts(toasts: &ToastStore) {
    for toast in toasts.drain() {
        match toast.kind {
            ToastKind::Success => println!("✓ {}", toast.message),
            ToastKind::Info => println!("{}", toast.message),
            ToastKind::Error => eprintln!("✗ {}", toast.message),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;
    let _log_guard = init_tracing(&config);

    let api = build_client(&cli, &config)?;
    let toasts = Arc::new(ToastStore::new());
    let mut ctx = CommandContext {
        api,
        config,
        toasts: toasts.clone(),
        json: cli.json,
    };

    let result = commands::run(&mut ctx, cli.command).await;
    print_toasts(&toasts);

    match result {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<ApiError>() {
            // Teardown already printed the re-login hint
            Some(api_err) if api_err.is_auth_failure() => std::process::exit(1),
            Some(api_err) => {
                debug!(error = ?api_err, "Command failed");
                eprintln!("✗ {}", api_err.user_message());
                std::process::exit(1)
            }
            None => Err(e),
        },
    }
}

//! Heartline CLI
//!
//! Thin wrapper around heartline-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show session information
//! heartline info
//!
//! # List available themes
//! heartline theme list
//!
//! # Switch theme / toggle dark mode
//! heartline theme set winter
//! heartline theme toggle-dark
//!
//! # Inspect the active theme (class names, renderer name, palette)
//! heartline theme show
//!
//! # List locales, switch locale, render a message
//! heartline locale list
//! heartline locale set vi
//! heartline locale show couple.days_together count=42
//!
//! # Render the timeline (cached snapshot, or demo data)
//! heartline timeline --kind memory --page 1
//!
//! # Drive a full simulated session: login, load, logout
//! heartline session demo
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use heartline_core::provider::sample_snapshot;
use heartline_core::theme::{available_themes, renderer_theme_name, theme_info};
use heartline_core::{
    i18n, AppSession, InitPhase, Locale, StaticCoupleProvider, TimelineKind, TimelineQuery,
    TimelineStats, UserAccount,
};

/// Heartline - couple journaling core
#[derive(Parser)]
#[command(name = "heartline")]
#[command(version = "0.1.0")]
#[command(about = "Heartline - couple journaling core")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: ~/.heartline/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show session information
    Info,

    /// Theme management
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Locale management
    Locale {
        #[command(subcommand)]
        action: LocaleAction,
    },

    /// Render the timeline from the cached snapshot (or demo data)
    Timeline {
        /// Restrict to one kind: memory, reminder, blog, anniversary
        #[arg(short, long)]
        kind: Option<String>,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Rows per page
        #[arg(long, default_value_t = 10)]
        per_page: u32,

        /// Only rows carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Session lifecycle
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// List available themes
    List,
    /// Show the active theme in detail
    Show,
    /// Switch to a theme
    Set {
        /// Theme key (spring, summer, autumn, winter, love)
        key: String,
    },
    /// Toggle dark mode
    ToggleDark,
}

#[derive(Subcommand)]
enum LocaleAction {
    /// List supported locales
    List,
    /// Persist the UI locale
    Set {
        /// Locale tag (en, vi)
        locale: String,
    },
    /// Render one message key in the active locale
    Show {
        /// Message key, e.g. couple.days_together
        key: String,
        /// Placeholder arguments as name=value pairs
        args: Vec<String>,
    },
    /// List all known message keys
    Keys,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Drive a full simulated session: login, load couple data, logout
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let provider = Arc::new(StaticCoupleProvider::new(sample_snapshot()));
    let session = AppSession::new(&data_dir, provider)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;

    match cli.command {
        Commands::Info => {
            let locale = session.locale();
            println!("Heartline v0.1.0");
            println!("  Data directory: {}", data_dir.display());
            println!(
                "  Theme: {} (dark mode: {})",
                session.theme().current_theme(),
                if session.theme().is_dark_mode() {
                    "on"
                } else {
                    "off"
                }
            );
            println!("  Locale: {} ({})", locale, locale.native_name());
            let cached = session.storage().load_couple_snapshot()?.is_some();
            println!("  Cached couple snapshot: {}", if cached { "yes" } else { "no" });
        }

        Commands::Theme { action } => run_theme(&session, action)?,

        Commands::Locale { action } => run_locale(&session, action)?,

        Commands::Timeline {
            kind,
            page,
            per_page,
            tag,
        } => run_timeline(&session, kind, page, per_page, tag)?,

        Commands::Session {
            action: SessionAction::Demo,
        } => run_session_demo(&session).await?,
    }

    Ok(())
}

fn run_theme(session: &AppSession, action: ThemeAction) -> Result<()> {
    let theme = session.theme();
    match action {
        ThemeAction::List => {
            for info in available_themes() {
                let marker = if info.key == theme.current_theme() {
                    "*"
                } else {
                    " "
                };
                println!("{} {} - {} ({})", marker, info.key, info.label, info.animation);
            }
        }
        ThemeAction::Show => {
            let key = theme.current_theme();
            let palette = theme.colors();
            println!("Theme: {}", key);
            println!("  Dark mode: {}", theme.is_dark_mode());
            println!(
                "  Renderer name: {}",
                renderer_theme_name(&key, theme.is_dark_mode())
            );
            println!("  Animation: {}", theme.seasonal_animation());
            println!("  Card class: {}", theme.theme_class("card"));
            println!("  Primary: {}", palette.primary);
            println!("  Secondary: {}", palette.secondary);
            println!("  Accent: {}", palette.accent);
        }
        ThemeAction::Set { key } => {
            if theme_info(&key).is_none() {
                bail!("unknown theme: {key}");
            }
            theme.set_theme(&key);
            println!("Theme set to {}", key);
        }
        ThemeAction::ToggleDark => {
            theme.toggle_dark_mode();
            println!(
                "Dark mode {}",
                if theme.is_dark_mode() { "on" } else { "off" }
            );
        }
    }
    Ok(())
}

fn run_locale(session: &AppSession, action: LocaleAction) -> Result<()> {
    match action {
        LocaleAction::List => {
            let current = session.locale();
            for locale in Locale::all() {
                let marker = if locale == current { "*" } else { " " };
                println!("{} {} - {}", marker, locale, locale.native_name());
            }
        }
        LocaleAction::Set { locale } => {
            let locale: Locale = locale.parse()?;
            session.set_locale(locale)?;
            println!("Locale set to {}", locale);
        }
        LocaleAction::Show { key, args } => {
            let pairs = parse_message_args(&args)?;
            let borrowed: Vec<(&str, &str)> = pairs
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            println!("{}", i18n::translate(session.locale(), &key, &borrowed));
        }
        LocaleAction::Keys => {
            for key in i18n::keys() {
                println!("{}", key);
            }
        }
    }
    Ok(())
}

fn run_timeline(
    session: &AppSession,
    kind: Option<String>,
    page: u32,
    per_page: u32,
    tag: Option<String>,
) -> Result<()> {
    // Prefer the cached snapshot; fall back to demo data
    let snapshot = match session.storage().load_couple_snapshot()? {
        Some(snapshot) => snapshot,
        None => sample_snapshot(),
    };

    let mut query = TimelineQuery {
        page,
        per_page,
        tag,
        ..Default::default()
    };
    if let Some(ref kind) = kind {
        query.kinds = vec![parse_kind(kind)?];
    }

    let locale = session.locale();
    let result = query.paginate(&snapshot.timeline);

    println!("{}", i18n::message(locale, "timeline.title"));
    if result.items.is_empty() {
        println!("  {}", i18n::message(locale, "timeline.empty"));
    }
    for item in &result.items {
        let date = item
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());
        let done = match item.is_completed {
            Some(true) => " [done]",
            Some(false) => " [open]",
            None => "",
        };
        println!(
            "  {} {:12} {}{}",
            date,
            item.kind.to_string(),
            item.title.as_deref().unwrap_or("(untitled)"),
            done
        );
    }
    println!(
        "{}",
        i18n::translate(
            locale,
            "timeline.item_count",
            &[("count", &result.total.to_string())],
        )
    );

    let stats = snapshot
        .stats
        .unwrap_or_else(|| TimelineStats::compute(&snapshot.timeline, chrono::Utc::now()));
    println!(
        "{}",
        i18n::translate(
            locale,
            "dashboard.recent_activity",
            &[("count", &stats.recent.last_week.to_string())],
        )
    );

    Ok(())
}

async fn run_session_demo(session: &AppSession) -> Result<()> {
    let locale = session.locale();
    session.start();

    let mut account = UserAccount::new("u-minh", "minh@example.com");
    account.display_name = "Minh".to_string();

    println!(
        "{}",
        i18n::translate(locale, "auth.welcome", &[("name", &account.display_name)])
    );
    session.login(account);

    wait_for_phase(session, InitPhase::Ready).await?;

    let connection = session
        .couple()
        .connection()
        .context("couple data missing after initialization")?;
    println!(
        "{}",
        i18n::translate(
            locale,
            "couple.status",
            &[("status", &connection.status.to_string())],
        )
    );
    if let Some(days) =
        connection.anniversary_countdown_days(chrono::Utc::now().date_naive())
    {
        println!(
            "{}",
            i18n::translate(
                locale,
                "couple.anniversary_countdown",
                &[("count", &days.to_string())],
            )
        );
    }

    for item in session.couple().timeline() {
        println!("  {} {}", item.kind, item.title.unwrap_or_default());
    }

    println!("{}", i18n::message(locale, "auth.logout"));
    session.logout();
    wait_for_phase(session, InitPhase::Idle).await?;
    println!("Session demo complete");

    Ok(())
}

async fn wait_for_phase(session: &AppSession, wanted: InitPhase) -> Result<()> {
    let mut rx = session.couple().subscribe_phase();
    tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let phase = rx.borrow_and_update().clone();
            if phase == wanted {
                return Ok(());
            }
            if let InitPhase::Failed(reason) = phase {
                bail!("couple data initialization failed: {reason}");
            }
            rx.changed().await?;
        }
    })
    .await
    .context("timed out waiting for session phase")?
}

fn parse_kind(s: &str) -> Result<TimelineKind> {
    match s.to_ascii_lowercase().as_str() {
        "memory" => Ok(TimelineKind::Memory),
        "reminder" => Ok(TimelineKind::Reminder),
        "blog" => Ok(TimelineKind::Blog),
        "anniversary" => Ok(TimelineKind::Anniversary),
        other => bail!("unknown timeline kind: {other}"),
    }
}

fn parse_message_args(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .with_context(|| format!("argument must be name=value, got: {arg}"))
        })
        .collect()
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (~/.heartline/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".heartline")
        .join("data")
}

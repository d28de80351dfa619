use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockdash_client::api::DashboardClient;
use stockdash_client::config::Settings;
use stockdash_client::domain::analysis::AnalyzeOptions;
use stockdash_client::domain::auth::Credentials;

#[derive(Debug, Parser)]
#[command(name = "stockdash", about = "Command-line client for the trading-dashboard backend")]
struct Args {
    /// Backend base URL; overrides STOCKDASH_API_URL / API_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a full analysis for a symbol.
    Analyze {
        symbol: String,

        /// Lookback window, e.g. 1mo, 3mo, 1y.
        #[arg(long)]
        period: Option<String>,

        /// Request an AI recommendation alongside the technical analysis.
        #[arg(long)]
        ai: bool,

        /// Skip pattern detection.
        #[arg(long)]
        no_patterns: bool,

        /// Language for AI reasoning output.
        #[arg(long)]
        language: Option<String>,
    },

    /// Fetch raw stock data for a symbol.
    Stock {
        symbol: String,
        #[arg(long)]
        period: Option<String>,
    },

    /// Fetch chart data for a symbol.
    Chart {
        symbol: String,
        #[arg(long)]
        period: Option<String>,
    },

    /// Probe backend liveness; exits non-zero when unreachable.
    Health,

    /// Ask the AI a free-form trading question.
    Ask { question: String },

    /// Open a strategy chat session for a symbol.
    StrategyChat { symbol: String },

    /// Fetch simplified trading signals for a symbol.
    Signals {
        symbol: String,
        #[arg(long)]
        period: Option<String>,
    },

    /// List the symbols the backend supports.
    Symbols,

    /// Log in and print the issued token.
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: String,
    },

    /// Register a new account.
    Register {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: String,
    },

    /// Show the authenticated user.
    Whoami,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let mut settings = settings;
    if args.base_url.is_some() {
        settings.api_base_url = args.base_url.clone();
    }

    let client = DashboardClient::from_settings(&settings)?;

    if let Err(err) = run(&client, args.command).await {
        sentry_anyhow::capture_anyhow(&err);
        return Err(err);
    }
    Ok(())
}

async fn run(client: &DashboardClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Analyze {
            symbol,
            period,
            ai,
            no_patterns,
            language,
        } => {
            let options = AnalyzeOptions {
                period,
                include_ai: ai,
                include_patterns: if no_patterns { Some(false) } else { None },
                language,
            };

            let analysis = client.analyze(&symbol, options).await?;
            if let Some(ai_analysis) = &analysis.ai_analysis {
                if ai_analysis.is_failure() {
                    tracing::warn!(
                        symbol = %analysis.symbol,
                        error = ai_analysis.error.as_deref().unwrap_or("none"),
                        login_required = ai_analysis.login_required.unwrap_or(false),
                        quota_exceeded = ai_analysis.quota_exceeded.unwrap_or(false),
                        "AI analysis reported a structured failure"
                    );
                }
            }
            print_json(&analysis)
        }

        Command::Stock { symbol, period } => {
            print_json(&client.stock_data(&symbol, period.as_deref()).await?)
        }

        Command::Chart { symbol, period } => {
            print_json(&client.chart_data(&symbol, period.as_deref()).await?)
        }

        Command::Health => {
            if client.check_connection().await {
                println!("ok");
                Ok(())
            } else {
                println!("unreachable");
                std::process::exit(1);
            }
        }

        Command::Ask { question } => print_json(&client.ask_ai(&question).await?),

        Command::StrategyChat { symbol } => {
            print_json(&client.start_strategy_chat(&symbol).await?)
        }

        Command::Signals { symbol, period } => {
            print_json(&client.trading_signals(&symbol, period.as_deref()).await?)
        }

        Command::Symbols => print_json(&client.supported_symbols().await?),

        Command::Login {
            email,
            username,
            password,
        } => {
            let res = client
                .login(&Credentials {
                    email,
                    username,
                    password: Some(password),
                })
                .await?;
            if !res.success {
                anyhow::bail!("login failed: {}", res.message);
            }
            print_json(&res)
        }

        Command::Register {
            email,
            username,
            password,
        } => {
            let res = client
                .register(&Credentials {
                    email,
                    username,
                    password: Some(password),
                })
                .await?;
            if !res.success {
                anyhow::bail!("registration failed: {}", res.message);
            }
            print_json(&res)
        }

        Command::Whoami => print_json(&client.current_user().await?),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use herfa_application::Herfa;
use herfa_core::error::HerfaError;
use herfa_core::messages::error_message;
use herfa_core::models::Area;
use herfa_infrastructure::{ClientConfig, HerfaPaths, JsonFileStore};

mod commands;

#[derive(Parser)]
#[command(name = "herfa")]
#[command(about = "Herfa CLI - find and hire local craftsmen in Mosul", long_about = None)]
struct Cli {
    /// API base URL (overrides config file and HERFA_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory holding config and session data instead of the platform default
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and inspect workers
    Workers {
        #[command(subcommand)]
        action: WorkersAction,
    },
    /// List professions (cached)
    Professions {
        /// Bypass the local cache
        #[arg(long)]
        refresh: bool,
        /// Filter by name
        #[arg(long)]
        search: Option<String>,
    },
    /// List neighborhoods (cached)
    Neighborhoods {
        #[arg(long)]
        refresh: bool,
        #[arg(long, value_enum)]
        area: Option<AreaArg>,
    },
    /// Log in with a phone number or email
    Login {
        identifier: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and forget the stored session
    Logout,
    /// Show the logged-in user
    Profile,
    /// Service requests
    Requests {
        #[command(subcommand)]
        action: RequestsAction,
    },
    /// Worker portfolio images
    Portfolio {
        #[command(subcommand)]
        action: PortfolioAction,
    },
}

#[derive(Subcommand)]
enum WorkersAction {
    /// Search workers
    Search {
        #[arg(long)]
        profession: Option<i64>,
        #[arg(long)]
        neighborhood: Option<i64>,
        #[arg(long, value_enum)]
        area: Option<AreaArg>,
        /// Only workers currently accepting jobs
        #[arg(long)]
        available: bool,
        #[arg(long)]
        min_rating: Option<f64>,
        /// Free-text search
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one worker
    Show { id: i64 },
    /// Best rated workers
    Top {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum RequestsAction {
    /// Print status changes of a request until Ctrl-C
    Watch {
        id: i64,
        /// Poll interval in seconds (defaults to the configured interval)
        #[arg(long)]
        interval: Option<u64>,
    },
}

#[derive(Subcommand)]
enum PortfolioAction {
    /// Upload images to a worker's portfolio
    Upload {
        worker_id: i64,
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Description per image, in file order
        #[arg(long = "description")]
        descriptions: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AreaArg {
    Right,
    Left,
}

impl From<AreaArg> for Area {
    fn from(arg: AreaArg) -> Self {
        match arg {
            AreaArg::Right => Area::RightBank,
            AreaArg::Left => Area::LeftBank,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open(cli: &Cli) -> Result<Herfa> {
    let paths = HerfaPaths::new(cli.home.as_deref());
    let config = ClientConfig::load(&paths)?.with_base_url_override(cli.base_url.clone());
    let store = Arc::new(JsonFileStore::new(paths.store_dir()?));
    Ok(Herfa::builder(config).store(store).build()?)
}

async fn run(cli: Cli) -> Result<()> {
    let herfa = open(&cli)?;

    match cli.command {
        Commands::Workers { action } => match action {
            WorkersAction::Search {
                profession,
                neighborhood,
                area,
                available,
                min_rating,
                query,
                page,
                limit,
            } => {
                let filter = commands::workers::SearchFilter {
                    profession,
                    neighborhood,
                    area: area.map(Area::from),
                    available,
                    min_rating,
                    query,
                    page,
                    limit,
                };
                commands::workers::search(&herfa, filter).await?
            }
            WorkersAction::Show { id } => commands::workers::show(&herfa, id).await?,
            WorkersAction::Top { limit } => commands::workers::top(&herfa, limit).await?,
        },
        Commands::Professions { refresh, search } => {
            commands::reference::professions(&herfa, refresh, search.as_deref()).await?
        }
        Commands::Neighborhoods { refresh, area } => {
            commands::reference::neighborhoods(&herfa, refresh, area.map(Area::from)).await?
        }
        Commands::Login {
            identifier,
            password,
        } => commands::auth::login(&herfa, &identifier, &password).await?,
        Commands::Logout => commands::auth::logout(&herfa).await?,
        Commands::Profile => commands::auth::profile(&herfa).await?,
        Commands::Requests { action } => match action {
            RequestsAction::Watch { id, interval } => {
                commands::requests::watch(&herfa, id, interval).await?
            }
        },
        Commands::Portfolio { action } => match action {
            PortfolioAction::Upload {
                worker_id,
                files,
                descriptions,
            } => commands::portfolio::upload(&herfa, worker_id, &files, &descriptions).await?,
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<HerfaError>() {
            Some(err) => eprintln!("خطأ: {}", error_message(err)),
            None => eprintln!("خطأ: {:#}", e),
        }
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mindrec::loader::load_catalog;
use mindrec::{EvalConfig, Evaluator, Normalizer, RankingSession, SessionConfig};

/// Content-based recommendations from tagged catalogs
#[derive(Parser, Debug)]
#[command(name = "mindrec")]
#[command(about = "Content-based movie recommendation and evaluation", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the items most similar to a title
    Recommend {
        /// Path to the catalog CSV (title,tags columns)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Query title
        #[arg(short, long)]
        title: String,

        /// Number of recommendations
        #[arg(long, default_value_t = 5)]
        top_k: usize,
    },
    /// Evaluate ranking quality over the whole catalog
    Evaluate {
        /// Path to the catalog CSV (title,tags columns)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Recommendation list length per query
        #[arg(long, default_value_t = 5)]
        k: usize,

        /// Minimum shared tags for boolean relevance
        #[arg(long, default_value_t = 3)]
        min_common: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Recommend {
            catalog,
            title,
            top_k,
        } => {
            let session = build_session(&catalog)?;
            let titles = session.recommend(&title, top_k)?;
            for (rank, recommended) in titles.iter().enumerate() {
                println!("{}. {}", rank + 1, recommended);
            }
        }
        Command::Evaluate {
            catalog,
            k,
            min_common,
            json,
        } => {
            let session = build_session(&catalog)?;
            let evaluator = Evaluator::new(EvalConfig { k, min_common });
            let report = evaluator.run(&session)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("queries:        {}", report.queries);
                println!("k:              {}", report.k);
                println!("precision@k:    {:.4}", report.mean_precision);
                println!("recall@k:       {:.4}", report.mean_recall);
                println!("mrr:            {:.4}", report.mean_mrr);
                println!("ndcg@k:         {:.4}", report.mean_ndcg);
                println!("coverage:       {:.4}", report.coverage);
                println!("diversity:      {:.4}", report.diversity);
            }
        }
    }

    Ok(())
}

fn build_session(catalog_path: &PathBuf) -> anyhow::Result<RankingSession> {
    info!("Starting mindrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", catalog_path);

    let catalog = load_catalog(catalog_path)?;
    info!("Loaded {} items", catalog.len());

    let session = RankingSession::build(
        catalog,
        &Normalizer::default(),
        &SessionConfig::default(),
    )?;
    info!(
        "Session ready: vocabulary size {}, matrix {}x{}",
        session.vocabulary().len(),
        session.similarity().len(),
        session.similarity().len()
    );

    Ok(session)
}

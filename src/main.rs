mod error;
mod export;
mod generator;
mod model;
mod quality;
mod report;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use generator::sources::{FixedClock, NoJitter};
use generator::Generator;
use settings::Settings;

#[derive(Parser)]
#[command(name = "tutorial_gen", about = "Nano Banana tutorial generator and content validator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one article and print a scored summary
    Report {
        /// Keywords (default: the built-in style transfer set)
        keywords: Vec<String>,
    },
    /// Generate one article config as JSON
    Generate {
        /// Keywords describing the tutorial topic
        #[arg(required = true)]
        keywords: Vec<String>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pin the timestamps (RFC 3339) and disable rating jitter for reproducible output
        #[arg(long)]
        published_at: Option<String>,
    },
    /// Generate many articles and export each as JSON
    Batch {
        /// File with one comma-separated keyword set per line (default: built-in samples)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Output directory (default: TUTOR_EXPORT_DIR or data/articles)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Re-score an exported article config
    Validate {
        /// Path to an exported JSON config
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load();
    info!(?settings, "Loaded settings");
    let article_gen = Generator::system(settings.rating_jitter);

    let result = match cli.command {
        Commands::Report { keywords } => {
            let keywords = if keywords.is_empty() {
                generator::sample_keywords(0)
            } else {
                keywords
            };
            let config = article_gen.generate(&keywords)?;
            let review = quality::review(&config);
            report::print_report(&config, &review);
            Ok(())
        }
        Commands::Generate {
            keywords,
            output,
            published_at,
        } => {
            let config = match published_at {
                Some(at) => {
                    let at = chrono::DateTime::parse_from_rfc3339(&at)
                        .with_context(|| format!("Invalid --published-at timestamp: {}", at))?
                        .with_timezone(&chrono::Utc);
                    Generator::new(FixedClock(at), NoJitter).generate(&keywords)?
                }
                None => article_gen.generate(&keywords)?,
            };
            match output {
                Some(path) => {
                    export::write_json(&config, &path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} to {}", config.id, path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&config)?),
            }
            Ok(())
        }
        Commands::Batch { file, out_dir } => {
            let sets = match file {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    export::parse_keyword_sets(&text)
                }
                None => generator::sample_keyword_sets(),
            };
            if sets.is_empty() {
                println!("No keyword sets found.");
                return Ok(());
            }
            let dir = out_dir.unwrap_or_else(|| PathBuf::from(&settings.export_dir));
            println!("Generating {} articles into {}...", sets.len(), dir.display());
            let articles = article_gen.generate_batch(&sets)?;
            let rows = export_articles(articles, &dir)?;
            report::print_batch_table(&rows);
            let invalid = rows.iter().filter(|(_, r)| !r.validation.is_valid).count();
            println!("\n{} articles exported, {} failed validation.", rows.len(), invalid);
            Ok(())
        }
        Commands::Validate { path } => {
            let config = export::read_json(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            println!("{} ({})", config.title, config.id);
            let review = quality::review(&config);
            report::print_review(&review);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn export_articles(
    articles: Vec<model::ArticleConfig>,
    dir: &std::path::Path,
) -> anyhow::Result<Vec<(model::ArticleConfig, quality::Review)>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(articles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let mut rows = Vec::with_capacity(articles.len());
    for config in articles {
        export::export_to_dir(&config, dir)
            .with_context(|| format!("Failed to export {}", config.id))?;
        let review = quality::review(&config);
        rows.push((config, review));
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(rows)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

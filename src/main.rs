use anyhow::{Context, Result};
use clap::Parser;
use match_engine::{loader, EngineConfig, MatchEngine, MatchResult, ProfileEntry, SkillDictionary};
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Score a candidate profile against a job posting")]
struct Cli {
    /// Job posting text file
    posting: PathBuf,

    /// Candidate profile TOML file
    profile: PathBuf,

    /// Display budget for selected experience bullets
    #[arg(long, default_value_t = 6)]
    budget: u32,

    /// Dictionary TOML replacing the built-in vocabulary
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Emit the full match result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let posting = loader::load_posting(&cli.posting).await?;
    let profile = loader::load_profile(&cli.profile).await?;

    let engine = match &cli.dictionary {
        Some(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
            let dictionary = SkillDictionary::from_toml_str(&content)?;
            MatchEngine::with_dictionary(EngineConfig::default(), dictionary)
        }
        None => MatchEngine::new(EngineConfig::default()),
    };

    let result = engine
        .analyze(&posting, &profile, cli.budget)
        .context("Match analysis failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

fn print_summary(result: &MatchResult) {
    println!("Fit score: {}/100", result.score);
    println!();

    if !result.matched.is_empty() {
        println!("Matched requirements:");
        for hit in &result.matched {
            println!("  ✓ {} [{}]", hit.term, hit.category.label());
        }
        println!();
    }

    if !result.missing.is_empty() {
        println!("Missing requirements:");
        for hit in &result.missing {
            println!("  ✗ {} [{}]", hit.term, hit.category.label());
        }
        println!();
    }

    if !result.selected_bullets.is_empty() {
        println!("Selected experience bullets:");
        for entry in &result.selected_bullets {
            if let ProfileEntry::Bullet { text, .. } = entry {
                println!("  • {}", text);
            }
        }
        println!();
    }

    if !result.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &result.suggestions {
            println!("  - {}", suggestion.rationale);
        }
    }
}

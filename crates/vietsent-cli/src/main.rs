mod cli;

use std::io::{BufRead, BufReader};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vietsent_fusion::{FusionArbiter, FusionParams};
use vietsent_pipeline::{Analysis, KeywordSentimentModel, SentimentAnalyzer};
use vietsent_rules::{LexiconConfig, LexiconEngine};

use crate::cli::{Cli, Commands, OutputFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            lexicon,
            fusion,
            format,
            verbose,
        } => {
            init_logging(verbose);
            let analyzer = build_analyzer(lexicon.as_deref(), fusion.as_deref())?;
            let analysis = analyzer.analyze(&text).await?;
            print_analysis(&analysis, format)?;
        }

        Commands::Batch {
            input,
            lexicon,
            fusion,
            format,
            verbose,
        } => {
            init_logging(verbose);
            let analyzer = build_analyzer(lexicon.as_deref(), fusion.as_deref())?;

            let reader: Box<dyn BufRead> = if input == "-" {
                Box::new(BufReader::new(std::io::stdin()))
            } else {
                let file = std::fs::File::open(&input)
                    .with_context(|| format!("failed to open {input}"))?;
                Box::new(BufReader::new(file))
            };

            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match analyzer.analyze(&line).await {
                    Ok(analysis) => print_analysis(&analysis, format)?,
                    Err(err) => eprintln!("skipped: {err}"),
                }
            }
        }
    }

    Ok(())
}

fn build_analyzer(lexicon: Option<&str>, fusion: Option<&str>) -> anyhow::Result<SentimentAnalyzer> {
    let engine = match lexicon {
        Some(path) => LexiconEngine::new(
            LexiconConfig::from_file(path)
                .with_context(|| format!("failed to load lexicon from {path}"))?,
        )?,
        None => LexiconEngine::with_defaults()?,
    };
    let arbiter = match fusion {
        Some(path) => FusionArbiter::new(
            FusionParams::from_file(path)
                .with_context(|| format!("failed to load fusion parameters from {path}"))?,
        )?,
        None => FusionArbiter::with_defaults()?,
    };
    Ok(SentimentAnalyzer::new(
        engine,
        arbiter,
        Arc::new(KeywordSentimentModel::new()?),
    ))
}

fn print_analysis(analysis: &Analysis, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(analysis)?),
        OutputFormat::Text => {
            println!(
                "{} ({:.2})",
                analysis.verdict.sentiment, analysis.verdict.confidence
            );
            println!("  branch: {:?}", analysis.branch);
            println!(
                "  model:  {} ({:.2})",
                analysis.model.sentiment, analysis.model.confidence
            );
            println!(
                "  rules:  score {:+.1}, mixed {}, neutral context {}",
                analysis.rules.score, analysis.rules.mixed, analysis.rules.neutral_context
            );
            if let Some(warning) = &analysis.warning {
                println!("  warning: {warning}");
            }
            println!("  took:   {}us", analysis.latency_us);
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "vietsent_cli=debug,vietsent_pipeline=debug,vietsent_rules=debug,vietsent_fusion=debug"
    } else {
        "vietsent_cli=info,vietsent_pipeline=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

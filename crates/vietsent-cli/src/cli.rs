use clap::{Parser, Subcommand};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "vietsent")]
#[command(
    author,
    version,
    about = "Vietnamese sentiment analysis: lexicon rules fused with a statistical model"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single text
    Analyze {
        /// Text to analyze
        text: String,

        /// Lexicon configuration file (YAML); built-in lexicon when omitted
        #[arg(long)]
        lexicon: Option<String>,

        /// Fusion parameters file (YAML); calibrated defaults when omitted
        #[arg(long)]
        fusion: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze one text per line from a file
    Batch {
        /// Input file path, "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Lexicon configuration file (YAML); built-in lexicon when omitted
        #[arg(long)]
        lexicon: Option<String>,

        /// Fusion parameters file (YAML); calibrated defaults when omitted
        #[arg(long)]
        fusion: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "json", value_parser = parse_format)]
        format: OutputFormat,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{other}', expected text or json")),
        }
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}

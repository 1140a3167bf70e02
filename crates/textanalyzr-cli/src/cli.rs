use clap::Parser;

/// Interactive text statistics tool
///
/// Prompts for a paragraph, prints its character and word statistics, then
/// asks for a character and a word to look up.
#[derive(Parser, Debug)]
#[command(name = "textanalyzr")]
#[command(version, about = "Interactive text statistics tool")]
pub struct Cli {
    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Give up after this many invalid answers to a single prompt
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

//! CLI entry point for Canto.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Canto text-to-speech CLI
#[derive(Parser, Debug)]
#[command(name = "canto", version, about = "Canto — text-to-speech converter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert text to speech and save it as an MP3 file
    Say(SayArgs),
    /// List available Murf voices and their styles
    Voices,
}

/// Arguments for the `say` subcommand.
#[derive(Parser, Debug)]
pub struct SayArgs {
    /// Provider to use (openai, murf)
    #[arg(short, long, default_value = "openai")]
    pub provider: String,

    /// Voice identifier (e.g. alloy, en-US-natalie)
    #[arg(short, long, default_value = "alloy")]
    pub voice: String,

    /// Delivery style (murf only)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Speech rate offset (-50 to 50, murf only)
    #[arg(long, default_value_t = 0)]
    pub rate: i32,

    /// Speech pitch offset (-50 to 50, murf only)
    #[arg(long, default_value_t = 0)]
    pub pitch: i32,

    /// Output directory for generated audio
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Text to convert (positional)
    pub text: String,
}

//! Canto CLI binary entry point.

use clap::Parser;

use canto::cli::{Cli, Commands, SayArgs};
use canto::config::CantoConfig;
use canto::orchestrator::ConversionOrchestrator;
use canto::types::{ProviderKind, SpeechRequest};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Say(args) => handle_say(args).await,
        Commands::Voices => handle_voices().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn handle_say(args: SayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let provider: ProviderKind = args
        .provider
        .parse()
        .map_err(|_| format!("unknown provider '{}' (expected openai or murf)", args.provider))?;

    let config = CantoConfig::from_env();
    if let Some(dir) = args.out_dir {
        config.set_output_dir(dir);
    }

    let orchestrator = ConversionOrchestrator::from_config(&config);
    let request = SpeechRequest::builder()
        .text(args.text)
        .provider(provider)
        .voice_id(args.voice)
        .maybe_style(args.style)
        .rate(args.rate)
        .pitch(args.pitch)
        .build();

    match orchestrator.convert(&request).await {
        Ok(result) => {
            println!("Saved {}", result.local_path.display());
            if let Some(url) = result.remote_url {
                println!("Remote {url}");
            }
            Ok(())
        }
        Err(e) => Err(e.user_message().into()),
    }
}

async fn handle_voices() -> Result<(), Box<dyn std::error::Error>> {
    let config = CantoConfig::from_env();
    let orchestrator = ConversionOrchestrator::from_config(&config);

    let inventory = orchestrator
        .voices()
        .await
        .map_err(|e| e.user_message())?;
    if inventory.is_empty() {
        println!("No voices available.");
        return Ok(());
    }

    for voice in inventory.voices() {
        let styles = if voice.available_styles.is_empty() {
            "-".to_string()
        } else {
            voice.available_styles.join(", ")
        };
        println!(
            "{:<20} {:<16} {:<8} {:<8} {}",
            voice.voice_id, voice.display_name, voice.accent, voice.gender, styles
        );
    }
    Ok(())
}

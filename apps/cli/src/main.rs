//! Cadenza command-line shell
//!
//! Thin presentation layer: parse arguments, wire up the configured
//! catalog client and resolver, optionally classify a journal entry into
//! a mood, and print the resolved track list.

use std::sync::Arc;

use anyhow::{bail, Context};
use cadenza_catalog_client::build_client;
use cadenza_mood_client::MoodClient;
use cadenza_recommender::{MoodLabel, MoodSeedTable, RecommendationResolver, TrackRecord};
use cadenza_shared_config::CommonConfig;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default number of tracks to resolve
const DEFAULT_LIMIT: usize = 9;

/// Upper bound accepted for --limit
const MAX_LIMIT: usize = 50;

const USAGE: &str = "usage: cadenza <mood> [--limit N]
       cadenza --journal \"<free text>\" [--limit N]

Moods: Happy, Energetic, Relaxed, Calm, Sad, Anxious, Focused,
       Romantic, Nostalgic, Excited, Sleepy, Angry";

/// How the caller expressed their mood
#[derive(Debug, PartialEq)]
enum MoodInput {
    /// A mood word, passed straight to the resolver
    Label(String),
    /// Free text, classified by the mood model first
    Journal(String),
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    input: MoodInput,
    limit: usize,
}

impl CliArgs {
    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut input: Option<MoodInput> = None;
        let mut limit = DEFAULT_LIMIT;
        let mut args = args.peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--journal" => {
                    let text = args.next().context("--journal requires a text argument")?;
                    input = Some(MoodInput::Journal(text));
                }
                "--limit" => {
                    let value = args.next().context("--limit requires a number")?;
                    limit = value
                        .parse::<usize>()
                        .with_context(|| format!("invalid --limit value: {}", value))?;
                    limit = limit.clamp(1, MAX_LIMIT);
                }
                "--help" | "-h" => bail!("{}", USAGE),
                word if !word.starts_with('-') => {
                    input = Some(MoodInput::Label(word.to_string()));
                }
                other => bail!("unknown option: {}\n\n{}", other, USAGE),
            }
        }

        match input {
            Some(input) => Ok(Self { input, limit }),
            None => bail!("{}", USAGE),
        }
    }
}

fn print_tracks(tracks: &[TrackRecord]) {
    for (i, track) in tracks.iter().enumerate() {
        println!("{:2}. {} - {}", i + 1, track.title, track.artist);
        if let Some(album) = &track.album {
            println!("    album: {}", album);
        }
        if !track.url.is_empty() {
            println!("    listen: {}", track.url);
        }
        if let Some(preview) = &track.preview_url {
            println!("    preview: {}", preview);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadenza=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = CommonConfig::from_env().context("failed to load configuration")?;

    let client = build_client(&config).context("failed to build catalog client")?;
    let resolver = RecommendationResolver::new(client, Arc::new(MoodSeedTable::new()));

    let mood_text = match &args.input {
        MoodInput::Label(label) => label.clone(),
        MoodInput::Journal(text) => {
            let mood_client =
                MoodClient::new(&config.mood).context("failed to build mood client")?;
            match mood_client.classify(text).await {
                Ok(label) => label,
                Err(error) => {
                    // Classification is best-effort; fall back to the
                    // default mood rather than aborting
                    warn!(%error, "Mood classification failed, using default");
                    MoodLabel::default().to_string()
                }
            }
        }
    };

    let mood = MoodLabel::from_input(&mood_text);
    if matches!(args.input, MoodInput::Journal(_)) {
        println!("Detected mood: {}", mood);
    }

    let tracks = resolver.resolve(mood.as_str(), args.limit).await;

    if tracks.is_empty() {
        println!("No recommendations found.");
        return Ok(());
    }

    println!("Songs for your {} mood:\n", mood.to_string().to_lowercase());
    print_tracks(&tracks);

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use log::LevelFilter;
use tubelate_config::{TubelateConfig, config_path, load_config, resolve_http_settings};
use tubelate_core::{
    Language, Translation, TubelateError, TubelateResult, VideoMetadata, build_http_client,
};
use tubelate_deepl::DeeplClient;
use tubelate_youtube::{YoutubeClient, parse_video_id};

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the languages supported by DeepL
    Languages,
    /// Show title and description of a video
    Video {
        /// Video ID or URL, defaults to youtube_video_id from the config
        id: Option<String>,
    },
    /// Translate a piece of text with DeepL
    Translate {
        text: String,
        /// Target language code, e.g. DE
        #[arg(long)]
        to: String,
        /// Source language code, detected when omitted
        #[arg(long)]
        from: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[command(name = "tubelate")]
#[command(version, about = "Fetch YouTube video metadata and DeepL languages", long_about = None)]
struct Cli {
    /// Path to the JSON config file [default: config.json]
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Connect and request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Also translate the video title and description into this language
    #[arg(long, value_name = "LANG", global = true)]
    translate_to: Option<String>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

struct Clients {
    deepl: DeeplClient,
    youtube: YoutubeClient,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", style("Error:").red());
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> TubelateResult<()> {
    check_translate_to(&cli)?;
    let path = config_path(cli.config.as_deref());
    let config = load_config(&path)?;
    log::info!("loaded config from {}", path.display());
    let clients = build_clients(&config, cli.timeout)?;

    match cli.command {
        Some(Commands::Languages) => print_languages(&clients.deepl.languages().await?),
        Some(Commands::Video { id }) => {
            let video_id = normalize_video_id(id.as_deref().unwrap_or(&config.youtube_video_id));
            show_video(&clients, &video_id, cli.translate_to.as_deref()).await?;
        }
        Some(Commands::Translate { text, to, from }) => {
            let translation = clients
                .deepl
                .translate_from(&text, from.as_deref(), &to)
                .await?;
            print_translation("Translated text:", &translation);
        }
        None => run_default(&clients, &config, cli.translate_to.as_deref()).await?,
    }
    Ok(())
}

async fn run_default(
    clients: &Clients,
    config: &TubelateConfig,
    translate_to: Option<&str>,
) -> TubelateResult<()> {
    let languages = clients.deepl.languages().await?;
    print_languages(&languages);

    let video_id = normalize_video_id(&config.youtube_video_id);
    show_video(clients, &video_id, translate_to).await
}

async fn show_video(
    clients: &Clients,
    video_id: &str,
    translate_to: Option<&str>,
) -> TubelateResult<()> {
    let video = clients.youtube.fetch_video(video_id).await?;
    print_video(&video);

    if let Some(target) = translate_to {
        let title = clients.deepl.translate(&video.title, target).await?;
        print_translation("Translated title:", &title);
        let description = clients.deepl.translate(&video.description, target).await?;
        print_translation("Translated description:", &description);
    }
    Ok(())
}

/// `--translate-to` only makes sense where a video is shown.
fn check_translate_to(cli: &Cli) -> TubelateResult<()> {
    match (&cli.translate_to, &cli.command) {
        (Some(_), Some(Commands::Languages | Commands::Translate { .. })) => Err(
            TubelateError::InvalidInput("--translate-to only applies to video output".to_string()),
        ),
        _ => Ok(()),
    }
}

fn build_clients(config: &TubelateConfig, cli_timeout: Option<u64>) -> TubelateResult<Clients> {
    let settings = resolve_http_settings(config, cli_timeout)?;
    log::debug!("request timeout {:?}", settings.timeout);
    let http = build_http_client(&settings)?;

    let mut deepl = DeeplClient::new(http.clone(), config.deepl_api_key.clone());
    if let Some(url) = &config.deepl_api_url {
        deepl = deepl.with_base_url(url.clone())?;
    }
    let mut youtube = YoutubeClient::new(http, config.youtube_api_key.clone());
    if let Some(url) = &config.youtube_api_url {
        youtube = youtube.with_base_url(url.clone())?;
    }
    Ok(Clients { deepl, youtube })
}

fn normalize_video_id(input: &str) -> String {
    parse_video_id(input).unwrap_or_else(|| input.trim().to_string())
}

fn print_languages(languages: &[Language]) {
    println!("{}", style("DeepL supported languages:").bold());
    for language in languages {
        println!("  {} {}", style(format!("{:<6}", language.code)).cyan(), language.name);
    }
}

fn print_video(video: &VideoMetadata) {
    println!("{} {}", style("Title:").green(), video.title);
    if let Some(channel) = &video.channel_title {
        println!("{} {channel}", style("Channel:").dim());
    }
    if let Some(published) = &video.published_at {
        println!("{} {published}", style("Published:").dim());
    }
    println!("{} {}", style("Description:").green(), video.description);
}

fn print_translation(label: &str, translation: &Translation) {
    match &translation.detected_source_language {
        Some(source) => println!("{} [{source}] {}", style(label).green(), translation.text),
        None => println!("{} {}", style(label).green(), translation.text),
    }
}

mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use walkdir::WalkDir;

use yomitori_core::{Extractor, MediaInfo};
use yomitori_llm::OpenAiClient;

use config::AppConfig;
use error::CliError;

/// Video file extensions considered by --scan.
const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "ogm", "wmv", "webm", "flv", "m4v"];

/// Extract media metadata from release filenames via an LLM endpoint.
#[derive(Debug, Parser)]
#[command(name = "yomitori", version, about)]
struct Args {
    /// Filenames to extract.
    filenames: Vec<String>,

    /// Scan a directory for video files instead of naming them directly.
    #[arg(long, value_name = "DIR")]
    scan: Option<PathBuf>,

    /// Read the extraction instruction from a file instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Concurrent in-flight requests.
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Emit one JSON object per input instead of the plain rendering.
    #[arg(long)]
    json: bool,

    /// Override the configured model.
    #[arg(long)]
    model: Option<String>,

    /// Override the configured endpoint root.
    #[arg(long)]
    base_url: Option<String>,

    /// Print the user config file path and exit.
    #[arg(long)]
    config_path: bool,
}

/// One line of --json output.
#[derive(Serialize)]
struct JsonRecord<'a> {
    filename: &'a str,
    #[serde(flatten)]
    info: &'a MediaInfo,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("yomitori_cli=info,yomitori_core=info,yomitori_llm=info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.config_path {
        println!("{}", AppConfig::config_path().display());
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the batch; returns the number of failed extractions.
async fn run(args: Args) -> Result<usize, CliError> {
    let config = AppConfig::load()?;
    let endpoint = config.endpoint;

    if endpoint.api_key.is_empty() {
        return Err(CliError::MissingApiKey(
            AppConfig::config_path().display().to_string(),
        ));
    }

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)?,
        None => yomitori_core::DEFAULT_TEMPLATE.to_string(),
    };

    let mut inputs = args.filenames;
    if let Some(dir) = &args.scan {
        inputs.extend(collect_video_files(dir));
    }
    if inputs.is_empty() {
        return Err(CliError::NoInput);
    }

    let client = OpenAiClient::new(
        endpoint.api_key,
        args.base_url.unwrap_or(endpoint.base_url),
        args.model.unwrap_or(endpoint.model),
        Duration::from_secs(endpoint.timeout_secs),
    );
    let extractor = Extractor::new(client);

    // The endpoint is the scarce resource; bound the in-flight requests
    // here rather than inside the extractor.
    let results: Vec<(String, Result<MediaInfo, _>)> = stream::iter(inputs)
        .map(|filename| {
            let extractor = &extractor;
            let template = template.as_str();
            async move {
                let result = extractor.extract(&filename, template).await;
                (filename, result)
            }
        })
        .buffer_unordered(args.concurrency.max(1))
        .collect()
        .await;

    let mut failures = 0;
    for (filename, result) in &results {
        match result {
            Ok(info) if args.json => {
                let record = JsonRecord {
                    filename: filename.as_str(),
                    info,
                };
                println!("{}", serde_json::to_string(&record).expect("record serializes"));
            }
            Ok(info) => println!("{filename}\n  -> {info}"),
            Err(e) => {
                // Skip-and-continue: one bad filename never aborts the batch.
                failures += 1;
                eprintln!("{filename}: {e}");
            }
        }
    }
    Ok(failures)
}

/// Collect video filenames (not paths) under `dir`, recursively.
fn collect_video_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        tracing::warn!(path = %dir.display(), "scan directory does not exist");
        return files;
    }
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let is_video = ext
            .as_deref()
            .map(|e| VIDEO_EXTENSIONS.contains(&e))
            .unwrap_or(false);
        if !is_video {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }
    files
}

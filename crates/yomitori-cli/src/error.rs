use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no API key configured; set endpoint.api_key in {0}")]
    MissingApiKey(String),

    #[error("no filenames given; pass filenames or --scan <dir>")]
    NoInput,
}

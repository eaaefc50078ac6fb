use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "copy-gateway")]
#[command(about = "Bilingual ad copy generator backed by a chat completion API")]
pub struct Config {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    // Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Credential sent as a bearer token to the completion provider
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    // Base URL of the OpenAI compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    // Model identifier for every completion call
    #[arg(short, long, env = "OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    pub model: String,

    // Directory holding the built front-end
    #[arg(short, long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    // Upper bound on one provider round-trip, in seconds
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS")]
    pub provider_timeout: Option<u64>,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn provider_timeout(&self) -> Option<Duration> {
        self.provider_timeout.map(Duration::from_secs)
    }
}

mod analyze;
mod error;
mod langid;
mod normalize;
mod output;
mod preprocess;

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use services::{Services, ZemberekService};
use tracing::error;
use tracing_subscriber::EnvFilter;
use zemberek::{ClientBuilder, Connection, Credentials, Reply, TlsOptions};

use error::InvalidVarError;
use output::Output;

#[derive(Parser)]
#[clap(version, author, about)]
struct Opts {
    /// Path to the services YAML. If omitted, $ZEMBEREK_SERVICES or "services.yaml" is used.
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Server address as host:port. Overrides the configured host and port.
    #[clap(short, long, global = true)]
    address: Option<String>,

    /// Use TLS instead of plaintext.
    #[clap(long, global = true)]
    tls: bool,

    /// Request timeout in seconds. 0 means no timeout.
    #[clap(long, global = true)]
    timeout: Option<u64>,

    /// Print the raw response as JSON.
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Detect the language of a text.
    Langid(langid::Opts),

    /// Normalize noisy Turkish text.
    Normalize(normalize::Opts),

    /// Analyze a sentence and print the lemmas of every token.
    Analyze(analyze::SentenceOpts),

    /// Print every morphological analysis of a single word.
    Word(analyze::WordOpts),

    /// Split a text into tokens.
    Tokenize(preprocess::TokenizeOpts),

    /// Split a document into sentences.
    Sentences(preprocess::SentenceOpts),
}

const VAR_SERVICES_PATH: &str = "ZEMBEREK_SERVICES";

const VAR_ZEMBEREK_SCHEME: &str = "ZEMBEREK_SCHEME";
const VAR_ZEMBEREK_HOST: &str = "ZEMBEREK_HOST";
const VAR_ZEMBEREK_PORT: &str = "ZEMBEREK_PORT";
const VAR_ZEMBEREK_TLS: &str = "ZEMBEREK_TLS";
const VAR_ZEMBEREK_REQUEST_TIMEOUT: &str = "ZEMBEREK_REQUEST_TIMEOUT";
const VAR_ZEMBEREK_CONNECT_TIMEOUT: &str = "ZEMBEREK_CONNECT_TIMEOUT";

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "dotenv")] {
        dotenv::dotenv().ok();
    }

    init_tracing();

    let opts = Opts::parse();

    let services = match opts.config.as_deref() {
        Some(path) => load_services(path)?,

        None => match env::var_os(VAR_SERVICES_PATH) {
            Some(path) => load_services(path.as_ref())?,

            None => {
                let default_path = Path::new(services::DEFAULT_PATH);
                if cfg!(feature = "default-config-file") && default_path.exists() {
                    load_services(default_path)?
                } else {
                    Services::default()
                }
            },
        },
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?
        .block_on(run(opts, services))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_services(path: &Path) -> anyhow::Result<Services> {
    services::load(Some(path))
        .with_context(|| format!("failed to load services file {}", path.to_string_lossy()))
}

async fn run(opts: Opts, services: Services) -> anyhow::Result<()> {
    let env = EnvOverrides::from_env()?;
    let builder = client_builder(&opts, env, services.zemberek.unwrap_or_default());
    let connection = connect(builder)?;
    let output = Output::new(opts.json);

    match opts.command {
        MainCommand::Langid(cmd) => langid::run(&connection, cmd, output).await,
        MainCommand::Normalize(cmd) => normalize::run(&connection, cmd, output).await,
        MainCommand::Analyze(cmd) => analyze::run_sentence(&connection, cmd, output).await,
        MainCommand::Word(cmd) => analyze::run_word(&connection, cmd, output).await,
        MainCommand::Tokenize(cmd) => preprocess::run_tokenize(&connection, cmd, output).await,
        MainCommand::Sentences(cmd) => preprocess::run_sentences(&connection, cmd, output).await,
    }
}

fn connect(builder: ClientBuilder) -> anyhow::Result<Connection> {
    builder
        .connect()
        .context("failed to set up connection to zemberek")
}

/// Unwraps a finished call, logging the status of a failed one.
fn checked<T>(reply: Reply<T>, method: &'static str) -> anyhow::Result<T> {
    reply
        .into_result()
        .map_err(|err| {
            error!(method, status = %err.status(), "call failed");
            err
        })
        .with_context(|| format!("{} failed", method))
}

/// Connection settings taken from `ZEMBEREK_*` environment variables.
#[derive(Clone, Debug, Default)]
struct EnvOverrides {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    tls: bool,
    request_timeout: Option<u64>,
    connect_timeout: Option<u64>,
}

impl EnvOverrides {
    fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            scheme: env_var(VAR_ZEMBEREK_SCHEME)
                .context("failed to read zemberek scheme")?,
            host: env_var(VAR_ZEMBEREK_HOST)
                .context("failed to read zemberek host")?,
            port: env_var_parse(VAR_ZEMBEREK_PORT)
                .context("failed to read zemberek port")?,
            tls: env_var_parse(VAR_ZEMBEREK_TLS)
                .context("failed to read zemberek tls flag")?
                .unwrap_or(false),
            request_timeout: env_var_parse(VAR_ZEMBEREK_REQUEST_TIMEOUT)
                .context("failed to read zemberek request timeout")?,
            connect_timeout: env_var_parse(VAR_ZEMBEREK_CONNECT_TIMEOUT)
                .context("failed to read zemberek connect timeout")?,
        })
    }
}

/// Flags win over the environment, which wins over the services file. Zero
/// timeouts are treated as unset by the builder.
fn client_builder(opts: &Opts, env: EnvOverrides, config: ZemberekService) -> ClientBuilder {
    let mut client_builder = ClientBuilder::new();

    if let Some(scheme) = env.scheme.or(config.scheme) {
        client_builder.scheme(scheme);
    }

    if let Some(host) = env.host.or(config.host) {
        client_builder.host(host);
    }

    if let Some(port) = env.port.or(config.port) {
        client_builder.port(port);
    }

    if let Some(address) = opts.address.as_deref() {
        client_builder.address(address);
    }

    if opts.tls || env.tls || config.tls.is_some() {
        let tls = config.tls.unwrap_or_default();
        client_builder.credentials(Credentials::Tls(TlsOptions {
            domain: tls.domain,
            ca_certificate: tls.ca_certificate,
        }));
    }

    if let Some(timeout) = opts.timeout
        .or(env.request_timeout)
        .or(config.request_timeout_seconds)
    {
        client_builder.request_timeout(Duration::from_secs(timeout));
    }

    if let Some(timeout) = env.connect_timeout.or(config.connect_timeout_seconds) {
        client_builder.connect_timeout(Duration::from_secs(timeout));
    }

    if let Some(limit) = config.concurrency_limit {
        client_builder.concurrency_limit(limit);
    }

    client_builder
}

fn env_var(key: &'static str) -> Result<Option<String>, InvalidVarError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(bad_str)) => {
            Err(InvalidVarError::invalid_utf8(key, bad_str))
        }
    }
}

fn env_var_parse<T>(key: &'static str) -> Result<Option<T>, InvalidVarError>
where
    T: FromStr,
{
    env_var(key)
        .and_then(|val| val
            .map(|val| val
                .parse::<T>()
                .map_err(|_| InvalidVarError::parse_error(key, val.into())))
            .transpose())
}

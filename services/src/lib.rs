use std::path::{Path, PathBuf};
use std::{fs, io, result};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PATH: &str = "services.yaml";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Services {
    pub zemberek: Option<ZemberekService>,
}

/// Where the Zemberek gRPC server lives. Every field may be left out and filled
/// in from the environment or the command line instead.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ZemberekService {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsService>,
    pub request_timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
    pub concurrency_limit: Option<usize>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TlsService {
    pub domain: Option<String>,
    pub ca_certificate: Option<PathBuf>,
}

/// Attempts to load the YAML services specification at the given path.
/// If the given path is None, the default path `services.yaml` is used.
pub fn load(path: Option<&Path>) -> Result<Services> {
    load_with_default_path(path, DEFAULT_PATH.as_ref())
}

pub fn load_with_default_path(path: Option<&Path>, default_path: &Path) -> Result<Services> {
    let contents = fs::read_to_string(path.unwrap_or(default_path))?;
    parse(&contents)
}

pub fn parse(contents: &str) -> Result<Services> {
    let services = serde_yaml::from_str(contents)?;
    Ok(services)
}

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    FileIO(#[from] io::Error),
    #[error(transparent)]
    Deserialization(#[from] serde_yaml::Error),
}

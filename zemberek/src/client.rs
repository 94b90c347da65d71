use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tracing::debug;

use crate::dispatch::GrpcDispatcher;
use crate::error::{ConnectionError, ConnectionResult};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6789;

/// Transport security for a connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Insecure,
    Tls(TlsOptions),
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::Insecure
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TlsOptions {
    /// Name to verify the server certificate against, if it differs from the host.
    pub domain: Option<String>,
    /// PEM file with the CA to trust. The system roots are used when unset.
    pub ca_certificate: Option<PathBuf>,
}

impl TlsOptions {
    fn client_config(&self) -> ConnectionResult<ClientTlsConfig> {
        let mut config = ClientTlsConfig::new();
        if let Some(domain) = &self.domain {
            config = config.domain_name(domain.clone());
        }
        config = match &self.ca_certificate {
            Some(path) => {
                let pem = fs::read(path).map_err(|source| ConnectionError::Certificate {
                    path: path.clone(),
                    source,
                })?;
                config.ca_certificate(Certificate::from_pem(pem))
            }
            None => config.with_native_roots(),
        };
        Ok(config)
    }
}

#[derive(Clone, Debug)]
pub struct ClientBuilder {
    par_scheme: String,
    par_host: String,
    par_port: u16,
    par_address: Option<String>,
    par_credentials: Credentials,
    par_request_timeout: Option<Duration>,
    par_connect_timeout: Option<Duration>,
    par_concurrency_limit: Option<usize>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> ClientBuilder {
        ClientBuilder {
            par_scheme: "http".to_owned(),
            par_host: DEFAULT_HOST.to_owned(),
            par_port: DEFAULT_PORT,
            par_address: None,
            par_credentials: Credentials::Insecure,
            par_request_timeout: None,
            par_connect_timeout: None,
            par_concurrency_limit: None,
        }
    }

    /// Creates the channel without dialing. An unreachable server is only
    /// reported by the first call made over the connection.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect(self) -> ConnectionResult<Connection> {
        let uri = self.uri();
        let mut ep = Endpoint::from_shared(uri.clone())
            .map_err(|_| ConnectionError::InvalidUri(uri.clone()))?;

        if let Some(timeout) = self.par_connect_timeout {
            ep = ep.connect_timeout(timeout);
        }

        if let Some(concurrency_limit) = self.par_concurrency_limit {
            ep = ep.concurrency_limit(concurrency_limit);
        }

        if let Credentials::Tls(tls) = &self.par_credentials {
            ep = ep.tls_config(tls.client_config()?)?;
        }

        debug!(%uri, "created lazy channel");

        Ok(Connection {
            channel: ep.connect_lazy(),
            request_timeout: self.par_request_timeout,
        })
    }

    /// The URI `connect` will dial.
    pub fn uri(&self) -> String {
        let scheme = match self.par_credentials {
            Credentials::Tls(_) if self.par_scheme == "http" => "https",
            _ => self.par_scheme.as_str(),
        };
        match &self.par_address {
            Some(address) => format!("{}://{}", scheme, address),
            None => format!("{}://{}:{}", scheme, self.par_host, self.par_port),
        }
    }

    pub fn scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.par_scheme = scheme.into();
        self
    }

    pub fn host(&mut self, host: impl Into<String>) -> &mut Self {
        self.par_host = host.into();
        self
    }

    pub fn port(&mut self, port: u16) -> &mut Self {
        self.par_port = port;
        self
    }

    pub fn socket(&mut self, host: impl Into<String>, port: u16) -> &mut Self {
        self.host(host)
            .port(port)
    }

    /// A literal `host:port` target. Takes precedence over `host` and `port`.
    pub fn address(&mut self, address: impl Into<String>) -> &mut Self {
        self.par_address = Some(address.into());
        self
    }

    pub fn credentials(&mut self, credentials: Credentials) -> &mut Self {
        self.par_credentials = credentials;
        self
    }

    /// A zero timeout means no timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.par_request_timeout = non_zero(timeout);
        self
    }

    /// A zero timeout means no timeout.
    pub fn connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.par_connect_timeout = non_zero(timeout);
        self
    }

    pub fn concurrency_limit(&mut self, limit: usize) -> &mut Self {
        self.par_concurrency_limit = Some(limit);
        self
    }
}

pub(crate) fn non_zero(timeout: Duration) -> Option<Duration> {
    if timeout.is_zero() {
        None
    } else {
        Some(timeout)
    }
}

/// A lazily connected channel that any number of stubs can share.
#[derive(Clone, Debug)]
pub struct Connection {
    channel: Channel,
    request_timeout: Option<Duration>,
}

impl Connection {
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            channel,
            request_timeout: None,
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn dispatcher(&self) -> GrpcDispatcher {
        GrpcDispatcher::new(self.channel.clone(), self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target() {
        assert_eq!(ClientBuilder::new().uri(), "http://localhost:6789");
    }

    #[test]
    fn address_overrides_socket() {
        let mut builder = ClientBuilder::new();
        builder.socket("nlp.internal", 7000).address("127.0.0.1:50051");
        assert_eq!(builder.uri(), "http://127.0.0.1:50051");
    }

    #[test]
    fn tls_switches_scheme() {
        let mut builder = ClientBuilder::new();
        builder
            .socket("nlp.example.com", 443)
            .credentials(Credentials::Tls(TlsOptions::default()));
        assert_eq!(builder.uri(), "https://nlp.example.com:443");
    }

    #[tokio::test]
    async fn malformed_address_is_rejected() {
        let mut builder = ClientBuilder::new();
        builder.address("not a host");
        match builder.connect() {
            Err(ConnectionError::InvalidUri(uri)) => assert_eq!(uri, "http://not a host"),
            other => panic!("unexpected result {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn missing_ca_certificate_is_reported() {
        let mut builder = ClientBuilder::new();
        builder.credentials(Credentials::Tls(TlsOptions {
            domain: None,
            ca_certificate: Some(PathBuf::from("/nonexistent/zemberek-ca.pem")),
        }));
        assert!(matches!(
            builder.connect(),
            Err(ConnectionError::Certificate { .. })
        ));
    }

    #[tokio::test]
    async fn zero_timeouts_are_ignored() {
        let mut builder = ClientBuilder::new();
        builder
            .request_timeout(Duration::ZERO)
            .connect_timeout(Duration::from_secs(0));
        assert_eq!(builder.par_connect_timeout, None);
        let connection = builder.connect().unwrap();
        assert_eq!(connection.request_timeout(), None);

        let mut builder = ClientBuilder::new();
        builder
            .request_timeout(Duration::from_secs(5))
            .request_timeout(Duration::ZERO);
        assert_eq!(builder.par_request_timeout, None);
    }

    #[tokio::test]
    async fn unreachable_address_connects_lazily() {
        let mut builder = ClientBuilder::new();
        builder.address("127.0.0.1:1").request_timeout(Duration::from_secs(3));
        let connection = builder.connect().unwrap();
        assert_eq!(connection.request_timeout(), Some(Duration::from_secs(3)));
    }
}

//! Establishing the stream
//!
//! Plain TCP, optionally wrapped in TLS verified against the webpki roots.

use super::ServerAddress;
use crate::error::TransportError;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::TlsConnector;

/// Any bidirectional byte stream the transport can run on
pub(crate) trait IrcStream: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin> IrcStream for T {}

/// Open a stream to the server, bounded by `connect_timeout` as a whole
pub(crate) async fn dial(
    addr: &ServerAddress,
    tls: bool,
    connect_timeout: Duration,
) -> Result<Box<dyn IrcStream>, TransportError> {
    timeout(connect_timeout, open(addr, tls))
        .await
        .map_err(|_| TransportError::ConnectTimeout(addr.to_string()))?
}

async fn open(addr: &ServerAddress, tls: bool) -> Result<Box<dyn IrcStream>, TransportError> {
    let connect_err = |source| TransportError::Connect {
        addr: addr.to_string(),
        source,
    };

    let tcp = TcpStream::connect((addr.host.as_str(), addr.port))
        .await
        .map_err(connect_err)?;
    tcp.set_nodelay(true).map_err(connect_err)?;

    if !tls {
        tracing::info!(server = %addr, "Connected without TLS");
        return Ok(Box::new(tcp));
    }

    let server_name = ServerName::try_from(addr.host.clone())
        .map_err(|_| TransportError::InvalidServerName(addr.host.clone()))?;
    let stream = tls_connector()?
        .connect(server_name, tcp)
        .await
        .map_err(connect_err)?;

    tracing::info!(server = %addr, "TLS connection established");
    Ok(Box::new(stream))
}

fn tls_connector() -> Result<TlsConnector, TransportError> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()?
    .with_root_certificates(roots)
    .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}

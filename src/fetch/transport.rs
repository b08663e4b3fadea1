//! Blocking transport: one TCP (optionally TLS) connection per exchange.
//!
//! Each exchange opens a fresh connection, sends the full request, and reads
//! until the peer closes — `Connection: close` framing, no `Content-Length`
//! handling. The connection is dropped when the exchange scope ends, success
//! or failure.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;

use log::{debug, warn};
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use crate::config::{
    MAX_RESPONSE_BYTES, SOCKET_READ_TIMEOUT, SOCKET_WRITE_TIMEOUT, TCP_CONNECT_TIMEOUT,
};
use crate::error_handling::FetchError;
use crate::fetch::target::Target;

/// Performs one blocking request/response round trip against `target`.
///
/// Any socket or TLS failure surfaces as [`FetchError::Network`]; there is
/// no retry at this layer.
pub(crate) fn exchange(target: &Target, request: &[u8]) -> Result<Vec<u8>, FetchError> {
    let stream = connect(target)?;
    debug!("connected to {}:{}", target.host(), target.port());

    let raw = if target.is_tls() {
        let mut tls = wrap_tls(stream, &target.connect_host())?;
        tls.write_all(request)?;
        tls.flush()?;
        read_until_close(&mut tls)?
    } else {
        let mut plain = stream;
        plain.write_all(request)?;
        plain.flush()?;
        read_until_close(&mut plain)?
    };

    debug!("received {} bytes from {}", raw.len(), target.host());
    Ok(raw)
}

/// Resolves the target and opens a TCP connection, trying each resolved
/// address with a bounded connect timeout.
fn connect(target: &Target) -> Result<TcpStream, FetchError> {
    let host = target.connect_host();
    let port = target.port();
    let addrs: Vec<SocketAddr> = (host.as_str(), port).to_socket_addrs()?.collect();
    if addrs.is_empty() {
        return Err(FetchError::Network(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no addresses found for {host}"),
        )));
    }

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, TCP_CONNECT_TIMEOUT) {
            Ok(stream) => {
                stream.set_read_timeout(Some(SOCKET_READ_TIMEOUT))?;
                stream.set_write_timeout(Some(SOCKET_WRITE_TIMEOUT))?;
                return Ok(stream);
            }
            Err(e) => {
                debug!("connect to {addr} failed: {e}");
                last_error = Some(e);
            }
        }
    }
    Err(FetchError::Network(last_error.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, format!("no addresses found for {host}"))
    })))
}

/// Wraps an open TCP stream in a TLS session verified against `host` using
/// the webpki trust roots.
fn wrap_tls(
    stream: TcpStream,
    host: &str,
) -> Result<StreamOwned<ClientConnection, TcpStream>, FetchError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| FetchError::Network(io::Error::other(format!("invalid server name: {e}"))))?;

    let connection = ClientConnection::new(Arc::new(config), server_name)
        .map_err(|e| FetchError::Network(io::Error::other(e)))?;

    Ok(StreamOwned::new(connection, stream))
}

/// Reads the stream to exhaustion, stopping at peer close.
///
/// A TLS peer that closes without `close_notify` shows up as an unexpected
/// EOF; once data has arrived that is treated as end-of-stream. Responses
/// are capped at [`MAX_RESPONSE_BYTES`].
fn read_until_close<S: Read>(stream: &mut S) -> Result<Vec<u8>, FetchError> {
    let mut response = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                response.extend_from_slice(&chunk[..n]);
                if response.len() >= MAX_RESPONSE_BYTES {
                    warn!(
                        "response exceeded {} bytes, discarding the remainder",
                        MAX_RESPONSE_BYTES
                    );
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof && !response.is_empty() => break,
            Err(e) => return Err(FetchError::Network(e)),
        }
    }
    Ok(response)
}

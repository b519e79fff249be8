//! TCP implementation of the map service traits.
//!
//! One persistent connection carries newline-terminated text frames:
//! `PING`, `PUT <map> <key> <value>`, `SIZE <map>` and `QUIT`. Each request
//! gets exactly one reply line; a reply starting with `ERR` is a service
//! error.

use async_trait::async_trait;
use bytes::BytesMut;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};
use tracing::{debug, info, warn};

use crate::error::{ClientError, ClientResult};
use crate::service::{Connection, MapService};
use crate::utils::{check_word, encode_request, take_line};

/// Connects to a map service over TCP.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpMapService;

#[async_trait]
impl MapService for TcpMapService {
    type Connection = TcpConnection;

    async fn connect(&self, address: &str) -> ClientResult<TcpConnection> {
        let stream = TcpStream::connect(address).await?;
        let mut conn = TcpConnection {
            stream,
            buf: BytesMut::with_capacity(1024),
            in_flight: false,
            closed: false,
        };

        let reply = conn.request(&["PING"]).await?;
        if &reply[..] != b"PONG" {
            return Err(ClientError::Protocol(format!(
                "unexpected handshake reply '{}'",
                String::from_utf8_lossy(&reply)
            )));
        }

        info!(address, "connected to map service");
        Ok(conn)
    }
}

/// An open TCP connection to the map service.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
    /// Bytes read but not yet consumed as a reply line.
    buf: BytesMut,
    /// Set while a request awaits its reply. Still set on entry to the next
    /// request means the previous one was abandoned mid-way.
    in_flight: bool,
    closed: bool,
}

impl TcpConnection {
    /// Send one request and wait for its reply line.
    async fn request(&mut self, words: &[&str]) -> ClientResult<BytesMut> {
        if self.closed {
            return Err(ClientError::ConnectionClosed);
        }
        if self.in_flight {
            return Err(ClientError::Protocol(
                "previous request was abandoned before its reply".to_string(),
            ));
        }

        self.in_flight = true;
        self.stream.write_all(&encode_request(words)).await?;

        let line = loop {
            if let Some(line) = take_line(&mut self.buf) {
                break line;
            }
            if self.stream.read_buf(&mut self.buf).await? == 0 {
                self.closed = true;
                return Err(ClientError::ConnectionClosed);
            }
        };
        self.in_flight = false;

        if &line[..] == b"ERR" || line.starts_with(b"ERR ") {
            let msg = String::from_utf8_lossy(line.get(4..).unwrap_or_default()).into_owned();
            warn!(request = words[0], %msg, "service returned an error");
            return Err(ClientError::Service(msg));
        }
        Ok(line)
    }
}

#[async_trait]
impl Connection for TcpConnection {
    async fn put(&mut self, map: &str, key: &str, value: &str) -> ClientResult<()> {
        check_word("map name", map)?;
        check_word("key", key)?;
        check_word("value", value)?;

        let reply = self.request(&["PUT", map, key, value]).await?;
        match &reply[..] {
            b"OK" => Ok(()),
            other => Err(ClientError::Protocol(format!(
                "unexpected PUT reply '{}'",
                String::from_utf8_lossy(other)
            ))),
        }
    }

    async fn size(&mut self, map: &str) -> ClientResult<u64> {
        check_word("map name", map)?;

        let reply = self.request(&["SIZE", map]).await?;
        std::str::from_utf8(&reply)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| {
                ClientError::Protocol(format!(
                    "unexpected SIZE reply '{}'",
                    String::from_utf8_lossy(&reply)
                ))
            })
    }

    async fn shutdown(&mut self) -> ClientResult<()> {
        if self.closed {
            return Ok(());
        }

        // An abandoned request leaves its reply unread; just hang up.
        if self.in_flight {
            debug!("closing with a request in flight");
        } else {
            let reply = self.request(&["QUIT"]).await?;
            if &reply[..] != b"BYE" {
                debug!(reply = %String::from_utf8_lossy(&reply), "unexpected QUIT reply");
            }
        }
        self.closed = true;
        self.stream.shutdown().await?;
        info!("disconnected from map service");
        Ok(())
    }
}

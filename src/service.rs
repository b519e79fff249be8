//! The seam between the driver and whatever map service it talks to.
//!
//! The driver only knows these traits. `TcpMapService` is the production
//! implementation; tests plug in their own.

use async_trait::async_trait;
use tracing::debug;

use crate::error::ClientResult;

/// Something the client can connect to.
#[async_trait]
pub trait MapService: Send + Sync {
    type Connection: Connection;

    /// Open a connection to the service at `address`.
    async fn connect(&self, address: &str) -> ClientResult<Self::Connection>;
}

/// An open connection to a map service.
#[async_trait]
pub trait Connection: Send {
    /// Store `value` under `key` in the map called `map`.
    async fn put(&mut self, map: &str, key: &str, value: &str) -> ClientResult<()>;

    /// Number of entries the service reports for `map`.
    async fn size(&mut self, map: &str) -> ClientResult<u64>;

    /// Release the connection. Further calls fail.
    async fn shutdown(&mut self) -> ClientResult<()>;

    /// Handle on the map called `name`.
    fn map(&mut self, name: impl Into<String>) -> RemoteMap<'_, Self>
    where
        Self: Sized,
    {
        RemoteMap {
            conn: self,
            name: name.into(),
        }
    }
}

/// A named map reached through a borrowed connection.
pub struct RemoteMap<'a, C: Connection> {
    conn: &'a mut C,
    name: String,
}

impl<'a, C: Connection> RemoteMap<'a, C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn put(&mut self, key: &str, value: &str) -> ClientResult<()> {
        debug!(map = %self.name, key, "put");
        self.conn.put(&self.name, key, value).await
    }

    pub async fn size(&mut self) -> ClientResult<u64> {
        let size = self.conn.size(&self.name).await?;
        debug!(map = %self.name, size, "size");
        Ok(size)
    }
}

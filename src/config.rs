//! Configuration for the map client.
//!
//! The defaults reproduce the fixed deployment the tool was written for:
//! one service address, one map name, keys drawn from `[0, 100000)`.

/// Address used when `--address` is not given.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5701";

/// Name of the map the client reads and writes.
pub const DEFAULT_MAP_NAME: &str = "persistent-map";

/// Upper bound (exclusive) of the random key numbers.
pub const DEFAULT_KEY_SPACE: u32 = 100_000;

/// Configuration for a client run.
///
/// ```
/// use map_filler::ClientConfig;
///
/// let config = ClientConfig::new()
///     .address("10.0.0.7:5701")
///     .build();
/// assert_eq!(config.get_map_name(), "persistent-map");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `host:port` of the map service.
    pub(crate) address: String,

    /// Name of the remote map.
    pub(crate) map_name: String,

    /// Keys are drawn from `[0, key_space)`.
    pub(crate) key_space: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            map_name: DEFAULT_MAP_NAME.to_string(),
            key_space: DEFAULT_KEY_SPACE,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the name of the remote map.
    pub fn map_name(mut self, name: impl Into<String>) -> Self {
        self.map_name = name.into();
        self
    }

    /// Set the size of the key space. Zero is raised to one.
    pub fn key_space(mut self, size: u32) -> Self {
        self.key_space = size.max(1);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Self {
        self
    }

    pub fn get_address(&self) -> &str {
        &self.address
    }

    pub fn get_map_name(&self) -> &str {
        &self.map_name
    }

    pub fn get_key_space(&self) -> u32 {
        self.key_space
    }
}

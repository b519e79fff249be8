//! The operating modes of the client.

/// What the client should do once connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert random entries until stopped.
    Fill,
    /// Report the map size once.
    Size,
    /// Invalid or unknown mode.
    Invalid,
}

impl Command {
    /// Parse a mode from its command-line spelling.
    ///
    /// Matching is exact: `FILL` is not `fill`.
    pub fn get(s: &str) -> Command {
        match s {
            "fill" => Command::Fill,
            "size" => Command::Size,
            _ => Command::Invalid,
        }
    }

    /// Get the string representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Fill => "fill",
            Command::Size => "size",
            Command::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! # Map Filler
//!
//! A small client for a remote in-memory map service. It either keeps
//! inserting random `key-<N>` / `value-<N>` entries into a named map, or
//! reports how many entries that map holds.
//!
//! ## Quick Start
//!
//! ```no_run
//! use map_filler::{ClientConfig, Driver, TcpMapService};
//!
//! #[tokio::main]
//! async fn main() -> map_filler::ClientResult<()> {
//!     let config = ClientConfig::new().address("10.0.0.7:5701").build();
//!     let driver = Driver::new(TcpMapService, config);
//!
//!     // Stop filling on Ctrl+C.
//!     let token = driver.cancellation_token();
//!     tokio::spawn(async move {
//!         let _ = tokio::signal::ctrl_c().await;
//!         token.cancel();
//!     });
//!
//!     driver.run(Some("fill"), &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Other services
//!
//! The driver only talks to the [`MapService`] and [`Connection`] traits.
//! [`TcpMapService`] is the bundled implementation; anything else that can
//! put and count entries can be plugged in.

pub mod cli;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod random;
pub mod service;
pub mod tcp;
pub mod utils;

pub use cli::Cli;
pub use command::Command;
pub use config::ClientConfig;
pub use driver::{Driver, FillReport, Outcome};
pub use error::{ClientError, ClientResult};
pub use random::{Entry, FastrandRandom, Random};
pub use service::{Connection, MapService, RemoteMap};
pub use tcp::{TcpConnection, TcpMapService};

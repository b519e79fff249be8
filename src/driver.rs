//! The client driver.
//!
//! Turns the mode argument into work against a [`MapService`]: print the
//! usage guidance, report the map size once, or fill the map with random
//! entries until the stop signal fires.

use std::future::Future;
use std::io::Write;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::command::Command;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::random::{Entry, FastrandRandom, Random};
use crate::service::{Connection, MapService};

/// Printed when no mode is given.
pub const USAGE: &str = "You should pass an argument to run: fill or size";

/// Printed when the mode is not recognised.
pub const WRONG_ARGUMENT: &str = "Wrong argument, you should pass: fill or size";

pub const CONNECTED: &str = "Successful connection!";

pub const FILL_STARTED: &str = "Starting to fill the map with random entries.";

/// What a fill run did before it was stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Completed put-then-size iterations.
    pub iterations: u64,
    /// Size reported by the last iteration.
    pub last_size: Option<u64>,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The argument was missing or wrong; nothing was contacted.
    Usage,
    /// Size mode finished with this size.
    Size(u64),
    /// Fill mode was stopped.
    Filled(FillReport),
}

/// Runs one invocation of the client against a map service.
///
/// ```no_run
/// use map_filler::{ClientConfig, Driver, TcpMapService};
///
/// # async fn run() -> map_filler::ClientResult<()> {
/// let driver = Driver::new(TcpMapService, ClientConfig::default());
/// driver.run(Some("size"), &mut std::io::stdout()).await?;
/// # Ok(())
/// # }
/// ```
pub struct Driver<S: MapService, R: Random = FastrandRandom> {
    service: S,
    random: R,
    config: ClientConfig,
    cancellation_token: CancellationToken,
}

impl<S: MapService> Driver<S> {
    pub fn new(service: S, config: ClientConfig) -> Self {
        Self {
            service,
            random: FastrandRandom,
            config,
            cancellation_token: CancellationToken::new(),
        }
    }
}

impl<S: MapService, R: Random> Driver<S, R> {
    /// Replace the key generator.
    pub fn with_random<R2: Random>(self, random: R2) -> Driver<S, R2> {
        Driver {
            service: self.service,
            random,
            config: self.config,
            cancellation_token: self.cancellation_token,
        }
    }

    /// Token that stops the run when cancelled.
    ///
    /// A fill loop stops gracefully and still shuts its connection down.
    /// Any other wait on the service (connecting, the size query, the
    /// goodbye in size mode) gives up with `ClientError::Interrupted`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Execute the mode named by `arg`, writing progress to `out`.
    ///
    /// Usage problems are reported on `out` and return `Outcome::Usage`.
    /// Service failures and interruptions are returned as errors; the
    /// connection is not shut down in that case.
    pub async fn run<W: Write + Send>(
        &self,
        arg: Option<&str>,
        out: &mut W,
    ) -> ClientResult<Outcome> {
        let command = match arg.map(Command::get) {
            None => {
                writeln!(out, "{}", USAGE)?;
                return Ok(Outcome::Usage);
            }
            Some(Command::Invalid) => {
                debug!(arg = ?arg, "unknown mode");
                writeln!(out, "{}", WRONG_ARGUMENT)?;
                return Ok(Outcome::Usage);
            }
            Some(command) => command,
        };

        let mut conn = self
            .interruptible(self.service.connect(&self.config.address))
            .await?;
        writeln!(out, "{}", CONNECTED)?;
        info!(address = %self.config.address, %command, "connected");

        let outcome = if command == Command::Fill {
            Outcome::Filled(self.fill(&mut conn, out).await?)
        } else {
            let size = self
                .interruptible(conn.map(self.config.map_name.as_str()).size())
                .await?;
            writeln!(out, "Current map size: {}", size)?;
            Outcome::Size(size)
        };

        // A stopped fill has already consumed the signal; its goodbye runs
        // to completion unless the process is interrupted again.
        if self.cancellation_token.is_cancelled() {
            conn.shutdown().await?;
        } else {
            self.interruptible(conn.shutdown()).await?;
        }
        Ok(outcome)
    }

    /// Await `fut`, giving up if the stop signal fires first.
    async fn interruptible<T, F>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.cancellation_token.cancelled() => {
                debug!("interrupted while waiting on the service");
                Err(ClientError::Interrupted)
            }
            result = fut => result,
        }
    }

    async fn fill<C: Connection, W: Write + Send>(
        &self,
        conn: &mut C,
        out: &mut W,
    ) -> ClientResult<FillReport> {
        writeln!(out, "{}", FILL_STARTED)?;

        let mut map = conn.map(self.config.map_name.as_str());
        let mut report = FillReport::default();

        loop {
            if self.cancellation_token.is_cancelled() {
                break;
            }

            let entry = Entry::random(&self.random, self.config.key_space);
            let step = async {
                map.put(&entry.key, &entry.value).await?;
                Ok::<_, ClientError>(map.size().await?)
            };

            let size = tokio::select! {
                biased;
                _ = self.cancellation_token.cancelled() => break,
                size = step => size?,
            };

            report.iterations += 1;
            report.last_size = Some(size);
            writeln!(out, "Current map size: {}", size)?;
        }

        info!(iterations = report.iterations, last_size = ?report.last_size, "fill stopped");
        Ok(report)
    }
}

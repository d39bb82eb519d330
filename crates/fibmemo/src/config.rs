//! Service configuration from CLI flags and environment.

use clap::Parser;

use fibmemo_core::{parse_memory_limit, CalculatorOptions, FibError, DEFAULT_EAGER_LIMIT};

/// fibmemo — Memoized Fibonacci HTTP service.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibmemo", version, about)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to.
    #[arg(long, default_value = "127.0.0.1", env = "FIBMEMO_BIND")]
    pub bind: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 8080, env = "FIBMEMO_PORT")]
    pub port: u16,

    /// Highest index precomputed at startup (eager cache limit).
    #[arg(long, default_value_t = DEFAULT_EAGER_LIMIT, env = "FIBMEMO_EAGER_LIMIT")]
    pub eager_limit: u64,

    /// Memory limit for the eager cache (e.g., "512M", "2G"); empty means unlimited.
    #[arg(long, default_value = "", env = "FIBMEMO_MEMORY_LIMIT")]
    pub memory_limit: String,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Calculator options derived from the flags. A zero limit means the default.
    ///
    /// # Errors
    ///
    /// Returns [`FibError::Config`] if the memory limit cannot be parsed.
    pub fn calculator_options(&self) -> Result<CalculatorOptions, FibError> {
        let memory_limit = parse_memory_limit(&self.memory_limit).map_err(FibError::Config)?;
        Ok(CalculatorOptions {
            eager_limit: self.eager_limit,
            memory_limit,
        }
        .normalize())
    }
}

//! # Vissai Gateway
//!
//! Demo backend for a customer-inquiry assistant.
//!
//! ## Features
//!
//! - **Draft responder**: rule-based intent classification and a localized reply draft
//! - **Health counters**: request, draft and latency counters kept in memory
//! - **Chat proxy**: forwards single-turn chat to OpenAI behind a sliding-window rate limiter
//! - **Realtime sessions**: mints ephemeral credentials for a browser voice client
//!
//! ## Running
//!
//! ```rust,no_run
//! use vissai_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// A configured gateway ready to serve
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance talking to the configured upstream
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");
        let server = server::HttpServer::new(&config)?;
        Ok(Self { server })
    }

    /// Run the gateway server until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting Vissai Gateway");
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

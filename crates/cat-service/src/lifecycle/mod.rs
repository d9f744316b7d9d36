//! # System Lifecycle
//!
//! Starts the cat actor, hands out its client, and shuts it down again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the server** - the router and every [`CatClient`] clone it holds are dropped
//! 2. **Drop the last client** - [`CatSystem::shutdown`] closes the sender side of the channel
//! 3. **Actor drains** - `receiver.recv()` returns `None` once queued requests are answered
//! 4. **Await completion** - the actor task is joined and a panic is reported as an error
//!
//! A client clone that outlives the server keeps the actor alive, so `shutdown` would wait
//! on it forever.

use crate::cat_actor;
use crate::clients::CatClient;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub struct CatSystem {
    /// Client for interacting with the Cat actor
    pub cat_client: CatClient,

    handle: JoinHandle<()>,
}

impl CatSystem {
    /// Spawns the cat actor with a request channel of `buffer_size` slots.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (cat_actor, cat_client) = cat_actor::new(buffer_size);
        let handle = tokio::spawn(cat_actor.run(()));

        info!(buffer_size, "Cat system started");
        Self { cat_client, handle }
    }

    /// Closes the actor's channel and waits for it to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cat system...");
        drop(self.cat_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Cat actor failed during shutdown");
            return Err(format!("Cat actor failed: {e}"));
        }

        info!("Cat system shut down");
        Ok(())
    }
}

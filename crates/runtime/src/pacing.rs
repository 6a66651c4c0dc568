//! Injectable pacing between execution steps.
//!
//! The core resolves commands instantly; the delays that give animations
//! room to play are purely a hosting concern. The session awaits the pacer
//! after every resolved command and before an autonomous enemy pass, so
//! swapping in [`NoPacing`] makes tests run the whole cycle synchronously.

use std::time::Duration;

use async_trait::async_trait;

/// Delay source consulted between execution steps.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Awaited after each resolved command.
    async fn after_command(&self);

    /// Awaited after a turn flip, before the autonomous enemy pass begins.
    async fn after_turn(&self);
}

/// Fixed real-time delays.
#[derive(Clone, Copy, Debug)]
pub struct FixedPacer {
    pub command_delay: Duration,
    pub turn_delay: Duration,
}

impl FixedPacer {
    /// Default gap between commands and turns.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self {
            command_delay: Self::DEFAULT_DELAY,
            turn_delay: Self::DEFAULT_DELAY,
        }
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Pacer for FixedPacer {
    async fn after_command(&self) {
        tokio::time::sleep(self.command_delay).await;
    }

    async fn after_turn(&self) {
        tokio::time::sleep(self.turn_delay).await;
    }
}

/// No delays at all; used by tests and headless tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn after_command(&self) {}

    async fn after_turn(&self) {}
}

// ABOUTME: Interrupt handling that registers Ctrl+C and SIGTERM before the first refresh cycle
// ABOUTME: Hands the scheduler a one-shot signal it checks between ticks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shutdown signalling
//!
//! OS handlers are registered eagerly in [`ShutdownSignal::install`], so an
//! interrupt that arrives while a cycle is in flight is captured and observed
//! by the scheduler once that cycle completes.

use std::future;
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::errors::{AppError, AppResult};

/// Fires the paired [`ShutdownSignal`]
pub type ShutdownTrigger = oneshot::Sender<()>;

/// Resolves once an interrupt has been received
#[derive(Debug)]
pub struct ShutdownSignal {
    receiver: oneshot::Receiver<()>,
}

impl ShutdownSignal {
    /// Create a signal fired by hand through the returned trigger
    #[must_use]
    pub fn channel() -> (ShutdownTrigger, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self { receiver })
    }

    /// Register SIGINT and SIGTERM handlers now and listen for them in a task
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if a signal handler cannot be registered
    #[cfg(unix)]
    pub fn install() -> AppResult<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt()).map_err(|e| {
            AppError::internal(format!("Failed to install SIGINT handler: {e}")).with_source(e)
        })?;
        let mut terminate = signal(SignalKind::terminate()).map_err(|e| {
            AppError::internal(format!("Failed to install SIGTERM handler: {e}")).with_source(e)
        })?;

        let (trigger, shutdown) = Self::channel();
        tokio::spawn(async move {
            tokio::select! {
                _ = interrupt.recv() => debug!("SIGINT received"),
                _ = terminate.recv() => debug!("SIGTERM received"),
            }
            let _ = trigger.send(());
        });

        Ok(shutdown)
    }

    /// Listen for Ctrl+C in a task
    ///
    /// # Errors
    /// Never fails on this platform; a listener error is logged and the
    /// signal then never fires
    #[cfg(not(unix))]
    pub fn install() -> AppResult<Self> {
        let (trigger, shutdown) = Self::channel();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    let _ = trigger.send(());
                }
                Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
            }
        });
        Ok(shutdown)
    }

    /// Wait for the interrupt
    ///
    /// If the trigger is dropped without firing, this never resolves.
    pub async fn wait(self) {
        if self.receiver.await.is_err() {
            error!("Shutdown listener stopped without a signal");
            future::pending::<()>().await;
        }
    }
}

use std::str::FromStr;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::models::EnrichedOrder;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store rejected the write")]
    Rejected,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for enriched orders.
///
/// `Ok(false)` means the store declined the write without raising a fault.
pub trait OrderStore: Send + Sync {
    fn save<'a>(&'a self, order: &'a EnrichedOrder) -> BoxFuture<'a, Result<bool, StoreError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    #[default]
    Accept,
    Reject,
    Fault,
}

impl FromStr for SaveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            "fault" => Ok(Self::Fault),
            other => Err(format!("unknown store mode: {other}")),
        }
    }
}

/// Stand-in for a real database. Logs the write and answers per `SaveMode`.
#[derive(Debug, Clone, Default)]
pub struct StubOrderStore {
    mode: SaveMode,
}

impl StubOrderStore {
    pub fn new(mode: SaveMode) -> Self {
        Self { mode }
    }
}

impl OrderStore for StubOrderStore {
    fn save<'a>(&'a self, order: &'a EnrichedOrder) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move {
            tracing::info!("Simulating DB save for order {}", order.order.display_id());
            match self.mode {
                SaveMode::Accept => Ok(true),
                SaveMode::Reject => Ok(false),
                SaveMode::Fault => Err(StoreError::Unavailable("simulated connection failure".into())),
            }
        })
    }
}

//! Stocktake Client - transport for the inventory backend
//!
//! Provides the `InventoryApi` trait consumed by the adjustment ledger,
//! its reqwest-based implementation, and the opaque session capability.

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpInventoryClient, InventoryApi};
pub use session::{SessionProvider, StaticSession, UserInfo};

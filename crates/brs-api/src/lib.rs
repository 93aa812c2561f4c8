// brs-api: Async Rust client for the backup/recovery protection sources API

pub mod client;
pub mod error;
pub mod options;
pub mod transport;
pub mod types;

pub use client::BackupRecoveryClient;
pub use error::Error;
pub use options::ListProtectionSourcesOptions;
pub use transport::{TlsMode, TransportConfig};
pub use types::ProtectionSourceNode;

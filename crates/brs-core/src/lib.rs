// brs-core: schema model, flattening, and data sources over brs-api.

pub mod config;
pub mod data_source;
pub mod error;
pub mod flatten;
pub mod resource_data;
pub mod schema;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, TlsVerification};
pub use error::{CoreError, ReadError};
pub use resource_data::{ResourceConfig, ResourceState};
pub use schema::{Attribute, AttributeType, Block, Mode, NestingMode, Primitive, Schema, SchemaError};
pub use session::{ClientSession, ProtectionSourcesApi, Session};

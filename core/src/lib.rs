//! PulseGraph core: reparasjon av klokke-målte puls-serier og generering av
//! session-metadata. Ren batch-transformasjon – ingen I/O; katalogstruktur,
//! CSV-lesing/-skriving og logger-oppsett eies av driveren.

pub mod aggregate;
pub mod errors;
pub mod metadata;
pub mod models;
pub mod pipeline;
pub mod repair;

#[cfg(feature = "python")]
pub mod py;

pub use aggregate::aggregate_sublevels;
pub use errors::{EmptySessionError, InvalidSeriesError};
pub use metadata::generate_metadata;
pub use models::{ErrorTag, MetadataEvent, Reading, RepairedReading, SessionOutput};
pub use pipeline::{repair_series_json, run_session, run_session_json};
pub use repair::repair_series;

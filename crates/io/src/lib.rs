//! # sirocco-io
//!
//! Load daily observation series for a point location from the NASA POWER
//! API (or a saved response on disk) and normalise them into a
//! date-ordered [`ObservationSeries`].
//!
//! ```mermaid
//! graph LR
//!     Q["SeriesQuery"] --> S{"SeriesSource"}
//!     S -->|"PowerClient (HTTP)"| P["parse_power_response"]
//!     S -->|"FileSource (disk)"| P
//!     P --> O["ObservationSeries"]
//! ```

mod error;
mod power;
mod query;
mod series;
mod source;
mod validate;
mod writer;

pub use error::IoError;
pub use power::{
    DEFAULT_BASE_URL, DEFAULT_COMMUNITY, DEFAULT_FILL_VALUE, DEFAULT_TIMEOUT_SECS, PowerClient,
    PowerConfig, parse_power_response,
};
pub use query::SeriesQuery;
pub use series::ObservationSeries;
pub use source::{FileSource, SeriesSource};
pub use writer::write_response;

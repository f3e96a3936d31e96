//! # sirocco-calendar
//!
//! Gregorian calendar dates for daily observation series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["\"20250501\" / \"2025-05-01\""] -->|"ObsDate::parse()"| B["ObsDate"]
//!     B -->|".days_until(other)"| C["i64 day count"]
//!     B -->|".to_compact()"| A
//!     B -->|"date_sequence()"| D["Vec of ObsDate"]
//!     E["(start, end)"] -->|"HistoryWindow::new()"| F["HistoryWindow"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sirocco_calendar::{HistoryWindow, ObsDate, date_sequence};
//!
//! let last = ObsDate::parse("20250101")?;
//! let target = ObsDate::parse("2025-05-01")?;
//! assert_eq!(last.days_until(target), 120);
//!
//! let window = HistoryWindow::default(); // 2000-01-01 ..= 2025-01-01
//! assert_eq!(window.n_days(), 9133);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar date newtype, parsing and day arithmetic |
//! | `sequence` | Consecutive-day sequence generation |
//! | `window` | Fixed historical training window |
//! | `error` | Error types |

mod date;
mod error;
mod sequence;
mod window;

pub use date::ObsDate;
pub use error::CalendarError;
pub use sequence::date_sequence;
pub use window::HistoryWindow;

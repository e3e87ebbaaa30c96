//! Time-ordered 63-bit identifiers.
//!
//! An identifier packs `elapsed | node | sequence` into the low 63 bits of
//! an `i64`, where `elapsed` counts time units since a custom epoch. A
//! [`Snowflake`] generator emits strictly increasing identifiers for one
//! node; it is configured through [`Settings`].
//!
//! ```
//! use grove_snowflake::Settings;
//!
//! let ids = Settings::classic().node(7).build().unwrap();
//! let id = ids.generate().unwrap();
//! assert_eq!(ids.decompose(id).node, 7);
//! ```

pub mod clock;
pub mod error;
pub mod generator;
pub mod layout;
pub mod node;
pub mod settings;

pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use generator::{Parts, Snowflake};
pub use layout::Layout;
pub use node::{default_node, private_ipv4};
pub use settings::{Settings, DEFAULT_EPOCH_MS};

//! Read-only calendar lookup tables.
//!
//! The deep calendar arithmetic (full lunisolar conversion, astronomical
//! solar terms) is an external concern; this module carries just enough
//! bundled data for the resolvers:
//!
//! - `lunar`: lunisolar month tables for a bounded year window plus a wider
//!   table of lunar new year dates.
//! - `solar_term`: the 24 solar terms via the century-coefficient formula.
//! - `holidays`: per-locale festival tables (fixed dates, nth-weekday rules,
//!   Easter-derived dates, lunar-anchored dates, multi-day statutory spans).
//!
//! Everything here is `const`/static data and pure functions; tables are
//! read-only after init and safely shared across threads.

#[path = "calendar/holidays.rs"]
mod holidays;
#[path = "calendar/lunar.rs"]
pub(crate) mod lunar;
#[path = "calendar/solar_term.rs"]
mod solar_term;

pub(crate) use holidays::{Festival, FestivalRule, easter_sunday, last_weekday_of_month, nth_weekday_of_month};
pub(crate) use solar_term::SolarTerm;

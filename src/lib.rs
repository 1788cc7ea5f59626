//! Project timeline: turns workspace project records into a day grid of
//! bars, elapsed-time overlays and milestone markers.

pub mod io;
pub mod model;
pub mod timeline;

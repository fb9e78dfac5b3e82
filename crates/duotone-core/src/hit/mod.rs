//! Interactive-zone hit testing.

mod zones;

pub use zones::{HitReport, HitZones, ZONE_HALF_WIDTH};

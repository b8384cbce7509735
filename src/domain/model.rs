use serde::{Deserialize, Serialize};

/// A single auction listing that passed extraction and the discount gate.
///
/// Deals are immutable once built; every scan cycle produces a fresh batch
/// that fully replaces the previous render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub name: String,
    pub price: f64,
    pub condition: String,
    pub msrp: f64,
    /// Percentage below MSRP, `(msrp - price) / msrp * 100`.
    pub discount: f64,
    pub listing_link: String,
}

use serde::{Deserialize, Serialize};

/// Inventory control parameters derived from a demand history.
///
/// Invariants:
/// `safety_stock == service_factor * demand_std_dev * sqrt(lead_time_days)` and
/// `reorder_point == average_daily_demand * lead_time_days + safety_stock`.
/// The square-root-of-time scaling assumes i.i.d. daily demand with the lead
/// time expressed in the same unit as the series cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryPolicy {
    /// Mean observed daily demand (units/day)
    pub average_daily_demand: f64,
    /// Sample standard deviation of daily demand
    pub demand_std_dev: f64,
    /// Supplier replenishment lead time in days
    pub lead_time_days: u32,
    /// Safety-stock multiplier (normal z-score equivalent)
    pub service_factor: f64,
    /// Buffer stock absorbing demand variability during lead time
    pub safety_stock: f64,
    /// Inventory level at which to trigger a replenishment order
    pub reorder_point: f64,
}

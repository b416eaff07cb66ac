mod observation;
mod forecast;
mod policy;

pub use observation::{DemandObservation, DemandSeries};
pub use forecast::{ForecastPoint, ForecastSeries};
pub use policy::InventoryPolicy;

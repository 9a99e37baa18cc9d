//! Statistical validation tests used during model selection.

mod stationarity;

pub use stationarity::{adf_test, CriticalValues, StationarityResult};

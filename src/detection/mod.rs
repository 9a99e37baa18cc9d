//! Detection utilities for time series analysis.

mod seasonality;

pub use seasonality::{
    detect_seasonality, detect_seasonality_auto, ACF_THRESHOLD, DEFAULT_MAX_PERIOD,
};

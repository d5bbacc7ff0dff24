//! Domain services - pure computations over domain entities

mod daily_aggregator;

pub use daily_aggregator::aggregate_daily;

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod data;
pub mod insights;
pub mod records;

pub use data::{ExportDataCommand, ExportDataHandler, ImportDataHandler, ImportDataResult};
pub use insights::{
    GenerateInsightsCommand, GenerateInsightsHandler, GenerateInsightsResult, ListInsightsHandler,
    ListInsightsQuery, MarkInsightReadCommand, MarkInsightReadHandler,
    ToggleInsightFavoriteCommand, ToggleInsightFavoriteHandler, DEFAULT_HISTORY_WINDOW,
    DEFAULT_METRIC_WINDOW,
};
pub use records::{RecordHealthDataCommand, RecordHealthDataHandler, RecordHealthDataResult};

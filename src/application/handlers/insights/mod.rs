//! Insight command and query handlers.

// Command handlers
mod generate_insights;
mod update_insight_state;

// Query handlers
mod list_insights;

pub use generate_insights::{
    GenerateInsightsCommand, GenerateInsightsHandler, GenerateInsightsResult,
    DEFAULT_HISTORY_WINDOW, DEFAULT_METRIC_WINDOW,
};
pub use list_insights::{ListInsightsHandler, ListInsightsQuery};
pub use update_insight_state::{
    MarkInsightReadCommand, MarkInsightReadHandler, ToggleInsightFavoriteCommand,
    ToggleInsightFavoriteHandler,
};

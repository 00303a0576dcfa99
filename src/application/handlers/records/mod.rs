//! Health record command handlers.

mod record_health_data;

pub use record_health_data::{
    RecordHealthDataCommand, RecordHealthDataHandler, RecordHealthDataResult,
};

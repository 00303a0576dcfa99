//! Data export and import handlers.

mod export_data;
mod import_data;

pub use export_data::{ExportDataCommand, ExportDataHandler};
pub use import_data::{ImportDataHandler, ImportDataResult};

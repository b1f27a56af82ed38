pub mod error;
pub mod ports;
pub mod settlement_processor;

pub use error::{ProcessingError, SheetError};
pub use ports::SheetParser;
pub use settlement_processor::{SettlementProcessor, SettlementReport};

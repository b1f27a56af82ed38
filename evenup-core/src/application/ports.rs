use crate::{application::error::SheetError, domain::model::ExpenseSheet};

pub trait SheetParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<ExpenseSheet, SheetError>;
}

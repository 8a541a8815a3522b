pub mod common;
pub mod record;

pub use common::{Displayable, Identifiable};
pub use record::ExpenseRecord;

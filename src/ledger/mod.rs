//! Ledger module containing statements, account summaries and the balance sheet

pub mod account;
pub mod balance_sheet;
pub mod core;
pub mod series;
pub mod statement;
pub mod transaction;

pub use account::*;
pub use balance_sheet::*;
pub use core::*;
pub use series::*;
pub use statement::*;
pub use transaction::*;

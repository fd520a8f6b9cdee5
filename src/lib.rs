pub mod account;
pub mod ledger;
pub mod operation;

pub use account::{Account, Outcome};
pub use ledger::{balance_line, replay, run_demo, withdrawal_message, write_summary};
pub use operation::{Operation, OperationType};

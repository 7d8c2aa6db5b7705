mod bank_account_command;
pub use bank_account_command::{Action, BankAccountCommand};

mod composite_command;
pub use composite_command::CompositeCommand;

mod money_transfer_command;
pub use money_transfer_command::MoneyTransferCommand;

/// An operation that can be executed and later reversed.
///
/// `succeeded` reports the outcome of the most recent `call` (or the value forced with
/// `set_succeeded`). Calling `call` twice applies the operation twice.
pub trait Command {
    fn call(&mut self);
    fn undo(&mut self);
    fn succeeded(&self) -> bool;
    fn set_succeeded(&mut self, value: bool);
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Outcome {
    NotRun,
    Succeeded,
    Failed,
}

impl From<bool> for Outcome {
    fn from(succeeded: bool) -> Self {
        if succeeded {
            Outcome::Succeeded
        } else {
            Outcome::Failed
        }
    }
}

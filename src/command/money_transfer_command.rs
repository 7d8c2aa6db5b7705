use std::cell::RefCell;

use super::{BankAccountCommand, Command, CompositeCommand};
use crate::bank_account::BankAccount;

/// Withdraws `amount` from one account and deposits it into another.
///
/// The deposit only runs if the withdrawal succeeded; otherwise it is marked as failed
/// without touching the destination account.
pub struct MoneyTransferCommand<'a> {
    composite: CompositeCommand<'a>,
    from: &'a RefCell<BankAccount>,
    to: &'a RefCell<BankAccount>,
    amount: f64,
}

impl<'a> MoneyTransferCommand<'a> {
    pub fn new(from: &'a RefCell<BankAccount>, to: &'a RefCell<BankAccount>, amount: f64) -> Self {
        let withdraw: Box<dyn Command + 'a> = Box::new(BankAccountCommand::withdraw(from, amount));
        let deposit: Box<dyn Command + 'a> = Box::new(BankAccountCommand::deposit(to, amount));
        let composite = CompositeCommand::new(vec![withdraw, deposit]);
        Self {
            composite,
            from,
            to,
            amount,
        }
    }

    pub fn from(&self) -> &'a RefCell<BankAccount> {
        self.from
    }

    pub fn to(&self) -> &'a RefCell<BankAccount> {
        self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl<'a> Command for MoneyTransferCommand<'a> {
    fn call(&mut self) {
        let mut ok = true;
        for command in self.composite.commands_mut() {
            if ok {
                command.call();
                ok = command.succeeded();
            } else {
                command.set_succeeded(false);
            }
        }
    }

    fn undo(&mut self) {
        self.composite.undo();
    }

    fn succeeded(&self) -> bool {
        self.composite.succeeded()
    }

    fn set_succeeded(&mut self, value: bool) {
        self.composite.set_succeeded(value);
    }
}

use std::cell::RefCell;

use super::{Command, Outcome};
use crate::bank_account::BankAccount;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Action {
    Deposit,
    Withdraw,
}

#[derive(Debug)]
pub struct BankAccountCommand<'a> {
    account: &'a RefCell<BankAccount>,
    action: Action,
    amount: f64,
    outcome: Outcome,
}

impl<'a> BankAccountCommand<'a> {
    pub fn new(account: &'a RefCell<BankAccount>, action: Action, amount: f64) -> Self {
        Self {
            account,
            action,
            amount,
            outcome: Outcome::NotRun,
        }
    }

    pub fn deposit(account: &'a RefCell<BankAccount>, amount: f64) -> Self {
        Self::new(account, Action::Deposit, amount)
    }

    pub fn withdraw(account: &'a RefCell<BankAccount>, amount: f64) -> Self {
        Self::new(account, Action::Withdraw, amount)
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl<'a> Command for BankAccountCommand<'a> {
    fn call(&mut self) {
        let mut account = self.account.borrow_mut();
        self.outcome = match self.action {
            Action::Deposit => {
                account.deposit(self.amount);
                Outcome::Succeeded
            }
            Action::Withdraw => account.withdraw(self.amount).into(),
        };
    }

    // A rejected inverse withdrawal is ignored; the account keeps whatever balance it had.
    fn undo(&mut self) {
        if self.outcome != Outcome::Succeeded {
            return;
        }
        let mut account = self.account.borrow_mut();
        match self.action {
            Action::Deposit => {
                account.withdraw(self.amount);
            }
            Action::Withdraw => account.deposit(self.amount),
        }
    }

    fn succeeded(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    fn set_succeeded(&mut self, value: bool) {
        self.outcome = value.into();
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use serde_derive::Deserialize;

use crate::bank_account::BankAccount;
use crate::command::{BankAccountCommand, Command, CompositeCommand, MoneyTransferCommand};
use crate::error::ScriptError;
use crate::serializable_form::{AccountBalance, Operation, StepReport};

const MEMBER_SEPARATOR: &str = ";";

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum StepType {
    #[serde(rename = "open")]
    Open,

    #[serde(rename = "deposit")]
    Deposit,

    #[serde(rename = "withdraw")]
    Withdraw,

    #[serde(rename = "transfer")]
    Transfer,

    #[serde(rename = "composite")]
    Composite,

    #[serde(rename = "call")]
    Call,

    #[serde(rename = "undo")]
    Undo,
}

/// One row of a script. Which fields are required depends on `step_type`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ScriptStep {
    #[serde(rename = "type")]
    pub step_type: StepType,

    pub name: Option<String>,
    pub account: Option<String>,
    pub to: Option<String>,
    pub amount: Option<f64>,
}

impl ScriptStep {
    fn new(step_type: StepType) -> Self {
        Self {
            step_type,
            name: None,
            account: None,
            to: None,
            amount: None,
        }
    }

    pub fn open(account: &str, initial_balance: f64) -> Self {
        Self {
            account: Some(account.to_string()),
            amount: Some(initial_balance),
            ..Self::new(StepType::Open)
        }
    }

    pub fn deposit(name: &str, account: &str, amount: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            account: Some(account.to_string()),
            amount: Some(amount),
            ..Self::new(StepType::Deposit)
        }
    }

    pub fn withdraw(name: &str, account: &str, amount: f64) -> Self {
        Self {
            step_type: StepType::Withdraw,
            ..Self::deposit(name, account, amount)
        }
    }

    pub fn transfer(name: &str, from: &str, to: &str, amount: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            account: Some(from.to_string()),
            to: Some(to.to_string()),
            amount: Some(amount),
            ..Self::new(StepType::Transfer)
        }
    }

    pub fn composite(name: &str, members: &[&str]) -> Self {
        Self {
            name: Some(name.to_string()),
            to: Some(members.join(MEMBER_SEPARATOR)),
            ..Self::new(StepType::Composite)
        }
    }

    pub fn call(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new(StepType::Call)
        }
    }

    pub fn undo(name: &str) -> Self {
        Self {
            step_type: StepType::Undo,
            ..Self::call(name)
        }
    }
}

/// The three walkthroughs run when no script file is given: undoing two leaf commands out of
/// order, a transfer and its undo, and a transfer rejected by the overdraft limit.
pub fn demo_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::open("account", 1000.0),
        ScriptStep::open("A", 1000.0),
        ScriptStep::open("B", 500.0),
        ScriptStep::withdraw("withdraw-200", "account", 200.0),
        ScriptStep::deposit("deposit-500", "account", 500.0),
        ScriptStep::call("withdraw-200"),
        ScriptStep::call("deposit-500"),
        ScriptStep::undo("withdraw-200"),
        ScriptStep::undo("deposit-500"),
        ScriptStep::transfer("transfer-300", "A", "B", 300.0),
        ScriptStep::call("transfer-300"),
        ScriptStep::undo("transfer-300"),
        ScriptStep::transfer("transfer-2000", "A", "B", 2000.0),
        ScriptStep::call("transfer-2000"),
        ScriptStep::undo("transfer-2000"),
    ]
}

fn required<'s, T: ?Sized>(
    value: Option<&'s T>,
    step: usize,
    field: &'static str,
) -> Result<&'s T, ScriptError> {
    value.ok_or(ScriptError::MissingField { step, field })
}

fn required_amount(step_number: usize, step: &ScriptStep) -> Result<f64, ScriptError> {
    let amount = step.amount.ok_or(ScriptError::MissingField {
        step: step_number,
        field: "amount",
    })?;
    if amount < 0.0 {
        return Err(ScriptError::NegativeAmount { step: step_number });
    }
    Ok(amount)
}

fn lookup_account<'a>(
    accounts: &'a HashMap<String, RefCell<BankAccount>>,
    name: &str,
) -> Result<&'a RefCell<BankAccount>, ScriptError> {
    accounts
        .get(name)
        .ok_or_else(|| ScriptError::UnknownAccount(name.to_string()))
}

/// Runs `steps` against fresh accounts opened with `overdraft_limit` and returns a report for
/// every `call` and `undo` step.
///
/// All `open` steps are applied first, regardless of where they appear in the script.
pub fn run_script(
    steps: &[ScriptStep],
    overdraft_limit: f64,
    debug_logger: &mut dyn Write,
) -> Result<Vec<StepReport>, ScriptError> {
    let mut account_names = Vec::<&str>::new();
    let mut accounts = HashMap::<String, RefCell<BankAccount>>::new();

    for (index, step) in steps.iter().enumerate() {
        if step.step_type != StepType::Open {
            continue;
        }
        let step_number = index + 1;
        let name = required(step.account.as_deref(), step_number, "account")?;
        let initial_balance = step.amount.ok_or(ScriptError::MissingField {
            step: step_number,
            field: "amount",
        })?;
        if accounts.contains_key(name) {
            return Err(ScriptError::DuplicateAccount(name.to_string()));
        }
        accounts.insert(
            name.to_string(),
            RefCell::new(BankAccount::with_overdraft_limit(
                initial_balance,
                overdraft_limit,
            )),
        );
        account_names.push(name);
        let _ = writeln!(
            debug_logger,
            "opened account {} with balance {}",
            name, initial_balance
        );
    }

    let mut commands: HashMap<String, Box<dyn Command + '_>> = HashMap::new();
    let mut reports = Vec::<StepReport>::new();

    for (index, step) in steps.iter().enumerate() {
        let step_number = index + 1;

        let command: Box<dyn Command + '_> = match step.step_type {
            StepType::Open => continue,
            StepType::Deposit | StepType::Withdraw => {
                let account_name = required(step.account.as_deref(), step_number, "account")?;
                let account = lookup_account(&accounts, account_name)?;
                let amount = required_amount(step_number, step)?;
                if step.step_type == StepType::Deposit {
                    Box::new(BankAccountCommand::deposit(account, amount))
                } else {
                    Box::new(BankAccountCommand::withdraw(account, amount))
                }
            }
            StepType::Transfer => {
                let from = required(step.account.as_deref(), step_number, "account")?;
                let to = required(step.to.as_deref(), step_number, "to")?;
                let amount = required_amount(step_number, step)?;
                Box::new(MoneyTransferCommand::new(
                    lookup_account(&accounts, from)?,
                    lookup_account(&accounts, to)?,
                    amount,
                ))
            }
            StepType::Composite => {
                let members = required(step.to.as_deref(), step_number, "to")?;
                let mut composite = CompositeCommand::default();
                for member in members
                    .split(MEMBER_SEPARATOR)
                    .map(str::trim)
                    .filter(|member| !member.is_empty())
                {
                    let command = commands
                        .remove(member)
                        .ok_or_else(|| ScriptError::UnknownCommand(member.to_string()))?;
                    composite.push(command);
                }
                Box::new(composite)
            }
            StepType::Call | StepType::Undo => {
                let name = required(step.name.as_deref(), step_number, "name")?;
                let command = commands
                    .get_mut(name)
                    .ok_or_else(|| ScriptError::UnknownCommand(name.to_string()))?;

                let operation = if step.step_type == StepType::Call {
                    command.call();
                    Operation::Call
                } else {
                    command.undo();
                    Operation::Undo
                };
                let succeeded = command.succeeded();
                let _ = writeln!(
                    debug_logger,
                    "step {}: {} {} -> succeeded={}",
                    step_number, operation, name, succeeded
                );

                reports.push(StepReport {
                    step: step_number,
                    operation,
                    command: name.to_string(),
                    succeeded,
                    balances: account_names
                        .iter()
                        .map(|account| {
                            AccountBalance::new(account, accounts[*account].borrow().balance())
                        })
                        .collect(),
                });
                continue;
            }
        };

        let name = required(step.name.as_deref(), step_number, "name")?;
        if commands.contains_key(name) {
            return Err(ScriptError::DuplicateCommand(name.to_string()));
        }
        let _ = writeln!(debug_logger, "step {}: declared {}", step_number, name);
        commands.insert(name.to_string(), command);
    }

    Ok(reports)
}

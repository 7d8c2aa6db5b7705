pub const DEFAULT_OVERDRAFT_LIMIT: f64 = -500.0;

#[derive(Debug, PartialEq)]
pub struct BankAccount {
    balance: f64,
    overdraft_limit: f64,
}

impl BankAccount {
    pub fn new(balance: f64) -> Self {
        Self::with_overdraft_limit(balance, DEFAULT_OVERDRAFT_LIMIT)
    }

    pub fn with_overdraft_limit(balance: f64, overdraft_limit: f64) -> Self {
        Self {
            balance,
            overdraft_limit,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    /// Returns false and leaves the balance untouched when the withdrawal would
    /// take the account below its overdraft limit.
    pub fn withdraw(&mut self, amount: f64) -> bool {
        if self.balance - amount < self.overdraft_limit {
            return false;
        }
        self.balance -= amount;
        true
    }

    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit() {
        let mut account = BankAccount::new(100.0);
        account.deposit(50.0);
        assert_eq!(account.balance(), 150.0);
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut account = BankAccount::new(100.0);
        assert!(account.withdraw(40.0));
        assert_eq!(account.balance(), 60.0);
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        let mut account = BankAccount::new(100.0);
        assert!(account.withdraw(600.0));
        assert_eq!(account.balance(), -500.0);
    }

    #[test]
    fn test_withdraw_past_overdraft_limit_is_rejected() {
        let mut account = BankAccount::new(100.0);
        assert_eq!(account.withdraw(600.5), false);
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_custom_overdraft_limit() {
        let mut account = BankAccount::with_overdraft_limit(100.0, 0.0);
        assert_eq!(account.overdraft_limit(), 0.0);
        assert_eq!(account.withdraw(100.5), false);
        assert!(account.withdraw(100.0));
        assert_eq!(account.balance(), 0.0);
    }
}

#[derive(Debug, PartialEq)]
pub enum ScriptError {
    MissingField { step: usize, field: &'static str },
    NegativeAmount { step: usize },
    UnknownAccount(String),
    UnknownCommand(String),
    DuplicateAccount(String),
    DuplicateCommand(String),
}

impl std::error::Error for ScriptError {}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::MissingField { step, field } => {
                write!(f, "step {}: missing required field `{}`", step, field)
            }
            ScriptError::NegativeAmount { step } => {
                write!(f, "step {}: amount must not be negative", step)
            }
            ScriptError::UnknownAccount(name) => write!(f, "unknown account `{}`", name),
            ScriptError::UnknownCommand(name) => write!(f, "unknown command `{}`", name),
            ScriptError::DuplicateAccount(name) => {
                write!(f, "account `{}` is already open", name)
            }
            ScriptError::DuplicateCommand(name) => {
                write!(f, "command `{}` is already declared", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ScriptError::MissingField {
                step: 3,
                field: "amount"
            }
            .to_string(),
            "step 3: missing required field `amount`"
        );
        assert_eq!(
            ScriptError::UnknownAccount("C".to_string()).to_string(),
            "unknown account `C`"
        );
    }
}

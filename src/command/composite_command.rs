use super::Command;

/// Runs its members in insertion order and undoes them in reverse order.
///
/// Every member is called even if an earlier one failed. See `MoneyTransferCommand` for a
/// short-circuiting variant.
#[derive(Default)]
pub struct CompositeCommand<'a> {
    commands: Vec<Box<dyn Command + 'a>>,
}

impl<'a> CompositeCommand<'a> {
    pub fn new(commands: Vec<Box<dyn Command + 'a>>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, command: Box<dyn Command + 'a>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(super) fn commands_mut(&mut self) -> &mut [Box<dyn Command + 'a>] {
        &mut self.commands
    }
}

impl<'a> Command for CompositeCommand<'a> {
    fn call(&mut self) {
        for command in self.commands.iter_mut() {
            command.call();
        }
    }

    fn undo(&mut self) {
        for command in self.commands.iter_mut().rev() {
            command.undo();
        }
    }

    fn succeeded(&self) -> bool {
        self.commands.iter().all(|command| command.succeeded())
    }

    fn set_succeeded(&mut self, value: bool) {
        for command in self.commands.iter_mut() {
            command.set_succeeded(value);
        }
    }
}

//! 调用者（Invoker）
//!
//! 只借用当前绑定的命令并按需触发，不感知命令背后的接收者。
//! 未绑定命令时触发会返回 `CommandError::NoCommandBound`，而不是静默忽略。
//!
use crate::command::Command;
use crate::error::{CommandError, CommandResult};
use std::fmt;

#[derive(Clone, Copy, Default)]
pub struct Invoker<'c> {
    command: Option<&'c dyn Command>,
}

impl<'c> Invoker<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定命令，替换此前绑定的命令
    pub fn set_command(&mut self, command: &'c dyn Command) {
        self.command = Some(command);
    }

    /// 解除绑定，返回此前绑定的命令（若有）
    pub fn clear_command(&mut self) -> Option<&'c dyn Command> {
        self.command.take()
    }

    pub fn is_bound(&self) -> bool {
        self.command.is_some()
    }

    pub fn execute_command(&self) -> CommandResult<()> {
        let command = self.bound()?;
        tracing::debug!(command = command.name(), "execute command");
        command.execute();
        Ok(())
    }

    pub fn un_execute_command(&self) -> CommandResult<()> {
        let command = self.bound()?;
        tracing::debug!(command = command.name(), "un_execute command");
        command.un_execute();
        Ok(())
    }

    fn bound(&self) -> CommandResult<&'c dyn Command> {
        self.command.ok_or(CommandError::NoCommandBound)
    }
}

impl fmt::Debug for Invoker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoker")
            .field("command", &self.command.map(|c| c.name()))
            .finish()
    }
}

//! 命令（Command）
//!
//! 命令对象封装“做/撤销”一对动作。系统不记录执行历史，
//! 调用方需自行保证先 `execute` 再 `un_execute` 才有撤销语义。
//!
use crate::receiver::Receiver;

pub trait Command {
    fn execute(&self);

    fn un_execute(&self);

    /// 命令的稳定名称（用于日志，不随重构变化）
    fn name(&self) -> &'static str;
}

/// 绑定单个接收者的命令，接收者仅被借用
pub struct ConcreteCommand<'r, R: Receiver + ?Sized> {
    receiver: &'r R,
}

impl<'r, R: Receiver + ?Sized> ConcreteCommand<'r, R> {
    pub fn new(receiver: &'r R) -> Self {
        Self { receiver }
    }

    pub fn receiver(&self) -> &'r R {
        self.receiver
    }
}

impl<R: Receiver + ?Sized> Clone for ConcreteCommand<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Receiver + ?Sized> Copy for ConcreteCommand<'_, R> {}

impl<R: Receiver + ?Sized> Command for ConcreteCommand<'_, R> {
    fn execute(&self) {
        self.receiver.action();
    }

    fn un_execute(&self) {
        self.receiver.un_action();
    }

    fn name(&self) -> &'static str {
        "ConcreteCommand"
    }
}

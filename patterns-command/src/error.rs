//! 命令模式错误定义
//!
//! 调用者在未绑定命令时触发属于契约违背，以 `CommandError` 显式返回。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// 调用者尚未绑定命令
    #[error("no command bound to invoker")]
    NoCommandBound,
}

pub type CommandResult<T> = Result<T, CommandError>;

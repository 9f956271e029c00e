//! 命令模式基础库（patterns-command）
//!
//! 把一次请求封装为可执行、可撤销的对象：
//! - 接收者（`receiver`）：真正执行动作与逆动作的对象；
//! - 命令（`command`）：绑定一个接收者，暴露 `execute/un_execute`；
//! - 调用者（`invoker`）：只持有命令，不了解接收者。
//!
//! 命令对接收者、调用者对命令都只是借用（非拥有），生命周期由调用方管理。
//!
pub mod command;
pub mod error;
pub mod invoker;
pub mod receiver;

pub use command::{Command, ConcreteCommand};
pub use invoker::Invoker;
pub use receiver::{ConsoleReceiver, Receiver};

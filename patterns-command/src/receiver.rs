use std::cell::RefCell;
use std::io::{self, Write};

/// 接收者：执行命令所委托的实际动作
///
/// `action` 与 `un_action` 在一般情形下互为逆操作。
pub trait Receiver {
    fn action(&self);
    fn un_action(&self);
}

/// 以逐行输出代替真实动作的接收者，默认写到标准输出
#[derive(Debug)]
pub struct ConsoleReceiver<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl ConsoleReceiver {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReceiver<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            tracing::error!(error = %err, line, "receiver output failed");
        }
    }
}

impl<W: Write> Receiver for ConsoleReceiver<W> {
    fn action(&self) {
        tracing::debug!("receiver action");
        self.emit("Action");
    }

    fn un_action(&self) {
        tracing::debug!("receiver un_action");
        self.emit("UnAction");
    }
}

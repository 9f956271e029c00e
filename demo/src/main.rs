use anyhow::Result;
use patterns_chain::{Chain, ConcreteHandler1, ConcreteHandler2, Handler};
use patterns_command::{ConcreteCommand, ConsoleReceiver, Invoker};
use tracing_subscriber::EnvFilter;

/// 责任链：1、2 → ConcreteHandler1；10 → ConcreteHandler2；20 → 无人处理
fn chain_of_responsibility() {
    let mut handler1: Box<dyn Handler> = Box::new(ConcreteHandler1::new());
    handler1.set_next(Box::new(ConcreteHandler2::new()));
    let chain = Chain::new(handler1);

    for request in [1, 2, 10, 20] {
        println!("{}", chain.handle_request(request));
    }
}

/// 命令：调用者执行后撤销，接收者依次输出 Action / UnAction
fn command() -> Result<()> {
    let receiver = ConsoleReceiver::new();
    let command = ConcreteCommand::new(&receiver);

    let mut invoker = Invoker::new();
    invoker.set_command(&command);
    invoker.execute_command()?;
    invoker.un_execute_command()?;
    Ok(())
}

fn main() -> Result<()> {
    // 日志写到 stderr，stdout 只保留演示输出
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("== chain of responsibility ==");
    chain_of_responsibility();

    println!("== command ==");
    command()?;
    Ok(())
}

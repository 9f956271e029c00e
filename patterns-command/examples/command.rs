use patterns_command::{ConcreteCommand, ConsoleReceiver, Invoker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let receiver = ConsoleReceiver::new();
    let command = ConcreteCommand::new(&receiver);

    let mut invoker = Invoker::new();
    invoker.set_command(&command);

    // 先执行再撤销：依次输出 Action、UnAction
    invoker.execute_command()?;
    invoker.un_execute_command()?;
    Ok(())
}

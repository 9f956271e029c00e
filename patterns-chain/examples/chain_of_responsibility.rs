use patterns_chain::{ConcreteHandler1, ConcreteHandler2, Handler};

fn main() {
    let mut handler1 = Box::new(ConcreteHandler1::new());
    let handler2 = Box::new(ConcreteHandler2::new());

    handler1.set_next(handler2);

    // 1、2 由 ConcreteHandler1 处理，10 由 ConcreteHandler2 处理，20 无人处理
    for request in [1, 2, 10, 20] {
        println!("{}", handler1.handle_request(request));
    }
}

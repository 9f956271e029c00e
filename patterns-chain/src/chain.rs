//! 责任链（Chain）
//!
//! 持有链头处理者，按给定顺序把处理者串联起来，并从链头路由请求。
//!
use crate::error::{ChainError, ChainResult};
use crate::handler::Handler;
use crate::outcome::Outcome;
use std::fmt;

pub struct Chain {
    head: Box<dyn Handler>,
}

impl Chain {
    /// 以单个处理者作为链头
    pub fn new(head: Box<dyn Handler>) -> Self {
        Self { head }
    }

    /// 按顺序链接处理者：前一个处理者的后继即下一个处理者
    pub fn from_handlers(handlers: Vec<Box<dyn Handler>>) -> ChainResult<Self> {
        let mut handlers = handlers.into_iter().rev();
        let mut head = handlers.next().ok_or(ChainError::Empty)?;
        for mut handler in handlers {
            handler.set_next(head);
            head = handler;
        }
        Ok(Self { head })
    }

    /// 在链尾追加处理者
    pub fn push(&mut self, handler: Box<dyn Handler>) {
        self.head.append(handler);
    }

    pub fn handle_request(&self, request: i32) -> Outcome {
        self.head.handle_request(request)
    }

    pub fn head(&self) -> &dyn Handler {
        &*self.head
    }

    /// 链上处理者名称（从链头到链尾）
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut current = Some(self.head());
        while let Some(handler) = current {
            names.push(handler.name());
            current = handler.successor().next();
        }
        names
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// 链至少包含链头，永不为空
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concrete::{ConcreteHandler1, ConcreteHandler2};

    #[test]
    fn empty_handler_list_is_rejected() {
        let err = Chain::from_handlers(Vec::new()).unwrap_err();
        assert_eq!(err, ChainError::Empty);
    }

    #[test]
    fn from_handlers_keeps_order() {
        let handlers: Vec<Box<dyn Handler>> = vec![
            Box::new(ConcreteHandler2::new()),
            Box::new(ConcreteHandler1::new()),
        ];
        let chain = Chain::from_handlers(handlers).unwrap();
        assert_eq!(chain.names(), ["ConcreteHandler2", "ConcreteHandler1"]);
        assert_eq!(chain.len(), 2);
        assert_eq!(
            format!("{chain:?}"),
            "[\"ConcreteHandler2\", \"ConcreteHandler1\"]"
        );
    }

    #[test]
    fn push_appends_to_tail() {
        let mut chain = Chain::new(Box::new(ConcreteHandler1::new()));
        assert_eq!(chain.handle_request(11), Outcome::Unhandled { request: 11 });

        chain.push(Box::new(ConcreteHandler2::new()));
        assert_eq!(chain.names(), ["ConcreteHandler1", "ConcreteHandler2"]);
        assert_eq!(chain.handle_request(11).handler(), Some("ConcreteHandler2"));
        assert!(!chain.is_empty());
    }
}

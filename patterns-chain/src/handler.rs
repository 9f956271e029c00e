//! 处理者（Handler）
//!
//! 定义处理者的能力集合：认领判断、处理、转交后继与链接后继。
//! 具体处理者只需提供名称、认领规则与后继槽位，路由逻辑由默认方法统一实现。
//!
use crate::outcome::Outcome;
use std::fmt;

/// 后继槽位：要么独占持有下一个处理者，要么是链尾
#[derive(Default)]
pub enum Successor {
    Next(Box<dyn Handler>),
    #[default]
    Terminal,
}

impl Successor {
    /// 放入新的后继，返回被替换下来的旧槽位
    pub fn replace(&mut self, next: Box<dyn Handler>) -> Successor {
        std::mem::replace(self, Self::Next(next))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    pub fn next(&self) -> Option<&dyn Handler> {
        match self {
            Self::Next(next) => Some(&**next),
            Self::Terminal => None,
        }
    }
}

// 逐个摘下后继再释放，链条长度不受栈深度限制
impl Drop for Successor {
    fn drop(&mut self) {
        let Self::Next(handler) = self else {
            return;
        };
        let mut tail = std::mem::take(handler.successor_mut());
        while let Self::Next(handler) = &mut tail {
            let rest = std::mem::take(handler.successor_mut());
            tail = rest;
        }
    }
}

impl fmt::Debug for Successor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next(next) => f.debug_tuple("Next").field(&next.name()).finish(),
            Self::Terminal => f.write_str("Terminal"),
        }
    }
}

/// 处理者：认领请求则处理并停止，否则转交给后继
///
/// 没有后继的处理者即链尾，由它报告“无人处理”；中间成员只负责转交。
pub trait Handler {
    /// 处理者名称（用于日志与路由结果）
    fn name(&self) -> &'static str;

    /// 是否认领该请求
    fn claims(&self, request: i32) -> bool;

    fn successor(&self) -> &Successor;

    fn successor_mut(&mut self) -> &mut Successor;

    /// 处理已认领的请求
    fn process(&self, request: i32) -> Outcome {
        tracing::info!(handler = self.name(), request, "request handled");
        Outcome::Handled {
            handler: self.name(),
            request,
        }
    }

    /// 路由请求：认领则处理，否则沿后继逐个转交；链尾返回 `Outcome::Unhandled`
    fn handle_request(&self, request: i32) -> Outcome {
        if self.claims(request) {
            return self.process(request);
        }

        let mut last = self.name();
        let mut successor = self.successor();
        while let Successor::Next(next) = successor {
            tracing::debug!(from = last, to = next.name(), request, "forwarding request");
            if next.claims(request) {
                return next.process(request);
            }
            last = next.name();
            successor = next.successor();
        }

        tracing::warn!(handler = last, request, "no handler accepted request");
        Outcome::Unhandled { request }
    }

    /// 设置后继（转移所有权），原有后继及其后续链条随之释放
    fn set_next(&mut self, next: Box<dyn Handler>) {
        self.successor_mut().replace(next);
    }

    /// 将 `tail` 链接到当前链条的末尾
    fn append(&mut self, tail: Box<dyn Handler>) {
        let mut slot = self.successor_mut();
        while let Successor::Next(next) = slot {
            slot = next.successor_mut();
        }
        *slot = Successor::Next(tail);
    }
}

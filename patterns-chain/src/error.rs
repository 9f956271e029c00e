//! 责任链错误定义
//!
//! 路由本身没有错误路径（无人处理是 `Outcome::Unhandled`），这里只覆盖构建链条。
//!
use thiserror::Error;

/// 构建责任链时的错误
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain requires at least one handler")]
    Empty,
}

pub type ChainResult<T> = Result<T, ChainError>;

//! 责任链模式基础库（patterns-chain）
//!
//! 请求沿单向链表在处理者之间传递，直到某个处理者接受它或链条结束：
//! - 处理者能力（`handler`）：判断、处理或转交请求，并独占持有至多一个后继；
//! - 具体处理者（`concrete`）：各自认领互不重叠的整数区间；
//! - 链（`chain`）：按顺序把处理者串联起来并从链头路由请求；
//! - 路由结果（`outcome`）：请求被谁处理，或无人处理。
//!
//! 链条通过所有权转移构建（`Box` 移入后继槽位），因此不可能成环，遍历总会终止。
//!
pub mod chain;
pub mod concrete;
pub mod error;
pub mod handler;
pub mod outcome;

pub use chain::Chain;
pub use concrete::{ConcreteHandler1, ConcreteHandler2};
pub use handler::{Handler, Successor};
pub use outcome::Outcome;

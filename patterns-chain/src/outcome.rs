//! 路由结果（Outcome）
//!
//! 描述一次请求在链上的最终去向。“无人处理”是可观察的结果而不是错误。
//!
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// 某个处理者认领并处理了请求
    Handled { handler: &'static str, request: i32 },
    /// 链上没有处理者认领该请求
    Unhandled { request: i32 },
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// 处理该请求的处理者名称；无人处理时为 `None`
    pub fn handler(&self) -> Option<&'static str> {
        match self {
            Self::Handled { handler, .. } => Some(handler),
            Self::Unhandled { .. } => None,
        }
    }

    pub fn request(&self) -> i32 {
        match self {
            Self::Handled { request, .. } | Self::Unhandled { request } => *request,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handled { handler, request } => {
                write!(f, "{handler} handled request {request}")
            }
            Self::Unhandled { request } => write!(f, "no handler for request {request}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_reflect_variant() {
        let handled = Outcome::Handled {
            handler: "ConcreteHandler1",
            request: 3,
        };
        assert!(handled.is_handled());
        assert_eq!(handled.handler(), Some("ConcreteHandler1"));
        assert_eq!(handled.request(), 3);

        let unhandled = Outcome::Unhandled { request: 42 };
        assert!(!unhandled.is_handled());
        assert_eq!(unhandled.handler(), None);
        assert_eq!(unhandled.request(), 42);
    }

    #[test]
    fn display_is_human_readable() {
        let handled = Outcome::Handled {
            handler: "ConcreteHandler2",
            request: 10,
        };
        assert_eq!(handled.to_string(), "ConcreteHandler2 handled request 10");
        assert_eq!(
            Outcome::Unhandled { request: 20 }.to_string(),
            "no handler for request 20"
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(Outcome::Handled {
            handler: "ConcreteHandler1",
            request: 1,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "handled", "handler": "ConcreteHandler1", "request": 1})
        );

        let json = serde_json::to_value(Outcome::Unhandled { request: -5 }).unwrap();
        assert_eq!(json, serde_json::json!({"status": "unhandled", "request": -5}));
    }
}

//! 具体处理者
//!
//! 两个处理者各自认领一个互不重叠的整数区间：`[0, 10)` 与 `[10, 20)`。
//!
use crate::handler::{Handler, Successor};
use std::ops::Range;

/// 生成认领固定区间的处理者：名称、区间常量与后继槽位
macro_rules! range_handler {
    ($(#[$meta:meta])* $ty:ident, $range:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $ty {
            next: Successor,
        }

        impl $ty {
            pub const NAME: &'static str = stringify!($ty);
            pub const RANGE: Range<i32> = $range;

            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Handler for $ty {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn claims(&self, request: i32) -> bool {
                Self::RANGE.contains(&request)
            }

            fn successor(&self) -> &Successor {
                &self.next
            }

            fn successor_mut(&mut self) -> &mut Successor {
                &mut self.next
            }
        }
    };
}

range_handler!(
    /// 认领 `[0, 10)` 的处理者
    ConcreteHandler1,
    0..10
);

range_handler!(
    /// 认领 `[10, 20)` 的处理者
    ConcreteHandler2,
    10..20
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    #[test]
    fn ranges_are_disjoint_and_half_open() {
        let h1 = ConcreteHandler1::new();
        let h2 = ConcreteHandler2::new();

        for (request, first, second) in [
            (-1, false, false),
            (0, true, false),
            (9, true, false),
            (10, false, true),
            (19, false, true),
            (20, false, false),
        ] {
            assert_eq!(h1.claims(request), first, "handler1 on {request}");
            assert_eq!(h2.claims(request), second, "handler2 on {request}");
        }
    }

    #[test]
    fn names_match_type_names() {
        assert_eq!(ConcreteHandler1::NAME, "ConcreteHandler1");
        assert_eq!(ConcreteHandler2::new().name(), "ConcreteHandler2");
        assert_eq!(ConcreteHandler2::RANGE, 10..20);
    }

    #[test]
    fn first_handler_without_successor_reports_unhandled() {
        let h1 = ConcreteHandler1::new();
        assert_eq!(h1.handle_request(15), Outcome::Unhandled { request: 15 });
    }

    #[test]
    fn second_handler_handles_its_range() {
        let h2 = ConcreteHandler2::new();
        assert_eq!(h2.handle_request(12).handler(), Some(ConcreteHandler2::NAME));
        assert_eq!(h2.handle_request(3), Outcome::Unhandled { request: 3 });
    }
}

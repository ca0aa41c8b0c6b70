/// 全局加载指示器
///
/// 早期实现用一个共享布尔值：任意请求完成都会把它清掉，
/// 并发请求下指示器可能在仍有请求在途时读到 false。
/// 这里改用按请求计数的作用域令牌：派发时加一，settle 时由
/// Drop 保证减一，"是否在加载" 是从计数派生出来的信号。
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 请求在途计数器
#[derive(Debug, Default)]
pub struct LoadingTracker {
    in_flight: AtomicUsize,
}

impl LoadingTracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 获取一个加载令牌
    ///
    /// 令牌存活期间计数加一，Drop 时减一。
    /// 成功、失败、panic 展开都会释放，计数不会卡住。
    pub fn acquire(self: &Arc<Self>) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            tracker: Arc::clone(self),
        }
    }

    /// 当前在途请求数
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// 派生信号：是否有任意请求在途
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }
}

/// 加载令牌，持有期间表示一个请求在途
#[derive(Debug)]
pub struct LoadingGuard {
    tracker: Arc<LoadingTracker>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_exactly_once() {
        let tracker = LoadingTracker::new();
        assert!(!tracker.is_loading());

        let guard = tracker.acquire();
        assert_eq!(tracker.in_flight(), 1);
        assert!(tracker.is_loading());

        drop(guard);
        assert_eq!(tracker.in_flight(), 0);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_overlapping_requests_keep_indicator_on() {
        // 旧的布尔实现中，第二个请求先完成会把指示器清成 false，
        // 此时第一个请求仍在途。计数方案下信号保持 true 直到全部 settle。
        let tracker = LoadingTracker::new();

        let first = tracker.acquire();
        let second = tracker.acquire();
        assert_eq!(tracker.in_flight(), 2);

        drop(second);
        assert!(tracker.is_loading(), "仍有请求在途时信号不能变 false");

        drop(first);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_guard_releases_on_panic_unwind() {
        let tracker = LoadingTracker::new();

        let result = std::panic::catch_unwind({
            let tracker = Arc::clone(&tracker);
            move || {
                let _guard = tracker.acquire();
                panic!("请求处理失败");
            }
        });

        assert!(result.is_err());
        assert_eq!(tracker.in_flight(), 0);
    }
}

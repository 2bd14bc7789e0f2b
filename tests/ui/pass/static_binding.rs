//! Delegates bound to statics live for `'static`.

use std::sync::atomic::{AtomicU32, Ordering};

use delegates::Delegate;

static TICKS: AtomicU32 = AtomicU32::new(0);

fn tick(by: u32) -> u32 {
    TICKS.fetch_add(by, Ordering::Relaxed) + by
}

fn make() -> Delegate<'static, fn(u32) -> u32> {
    Delegate::create_fn(tick)
}

fn main() {
    assert_eq!(make().call(2), 2);
}

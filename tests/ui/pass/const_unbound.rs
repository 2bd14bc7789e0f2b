//! Unbound delegates are constants.

use delegates::{Delegate, EventDelegate, Optional};

const ON_IDLE: EventDelegate<'static, fn()> = EventDelegate::new();
const ON_TICK: Delegate<'static, fn(u64), Optional> = Delegate::new();

fn main() {
    ON_IDLE.call();
    ON_TICK.call(1);
}

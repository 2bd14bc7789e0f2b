//! Each behavior tag with the return types it accepts.

use delegates::{Delegate, Expected, Mandatory, Optional};

fn main() {
    let _: Delegate<'static, fn(u32) -> u32> = Delegate::new();
    let _: Delegate<'static, fn(u32) -> u32, Mandatory> = Delegate::new();
    let _: Delegate<'static, fn(u32) -> u32, Expected> = Delegate::new();
    let _: Delegate<'static, fn(u32), Expected> = Delegate::new();
    let _: Delegate<'static, fn(u32), Optional> = Delegate::new();
    let _: Delegate<'static, fn()> = Delegate::new();
}

use std::cell::Cell;

use delegates::ForwardingDelegate;
use zerocopy::Immutable;

#[derive(Immutable)]
struct Handle<'b> {
    _slot: &'b Cell<u32>,
}

fn main() {
    let _ = ForwardingDelegate::<fn(&'static Handle<'static>)>::new();
}

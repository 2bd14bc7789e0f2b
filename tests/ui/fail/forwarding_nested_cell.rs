use std::cell::Cell;

use delegates::ForwardingDelegate;

fn main() {
    let _ = ForwardingDelegate::<fn(&'static &'static Cell<u32>)>::new();
}

use delegates::ForwardingDelegate;

fn main() {
    let _ = ForwardingDelegate::<fn(&'static mut i32)>::new();
}

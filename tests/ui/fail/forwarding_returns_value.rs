use delegates::ForwardingDelegate;

fn main() {
    let _ = ForwardingDelegate::<fn(u32) -> bool>::new();
}

use delegates::Delegate;

fn clamp(x: i16) -> i16 {
    x.max(0)
}

fn main() {
    let _ = Delegate::<fn(i32) -> i32>::create(&clamp);
}

use delegates::Delegate;

fn main() {
    let widen = |x: u64| x * 2;
    let _ = Delegate::<fn(u32) -> u64>::create(&widen);
}

use delegates::Delegate;

fn main() {
    let half = |x: u32| x / 2;
    let _ = Delegate::<fn(u32) -> u64>::create(&half);
}

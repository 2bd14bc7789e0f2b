use delegates::Delegate;

fn main() {
    let threshold = 5u32;
    let _ = Delegate::<fn(u32)>::create(&threshold);
}

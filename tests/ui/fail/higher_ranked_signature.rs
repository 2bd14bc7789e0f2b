use delegates::Delegate;

fn main() {
    let _ = Delegate::<fn(&u32)>::new();
}

use delegates::Delegate;

fn main() {
    let _ = Delegate::<u32>::new();
}

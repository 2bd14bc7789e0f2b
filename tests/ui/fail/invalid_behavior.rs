use delegates::Delegate;

#[derive(Clone, Copy, Default, Debug)]
struct Sometimes;

fn main() {
    let _ = Delegate::<fn(), Sometimes>::new();
}

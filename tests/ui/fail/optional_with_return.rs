use delegates::{Delegate, Optional};

fn main() {
    let _ = Delegate::<fn() -> i32, Optional>::new();
}

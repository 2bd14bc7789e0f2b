use delegates::Delegate;

fn main() {
    let table = [1u64, 2, 3];
    let lookup = move |i: usize| table[i];
    let _ = Delegate::<fn(usize) -> u64>::create_inline(lookup);
}

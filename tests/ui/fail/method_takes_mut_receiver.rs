use delegates::Delegate;

struct Counter(u32);

impl Counter {
    fn bump(&mut self, by: u32) {
        self.0 += by;
    }
}

fn main() {
    let counter = Counter(0);
    let _ = Delegate::<fn(u32)>::create_method(&counter, Counter::bump);
}

use delegates::Delegate;

struct Gauge(u32);

impl Gauge {
    fn read(&self, scale: u16) -> u32 {
        self.0 * u32::from(scale)
    }
}

fn main() {
    let gauge = Gauge(3);
    let _ = Delegate::<fn(u32) -> u32>::create_method(&gauge, Gauge::read);
}

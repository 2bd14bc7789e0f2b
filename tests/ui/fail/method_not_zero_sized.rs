use delegates::Delegate;

struct Gain(u32);

fn main() {
    let gain = Gain(2);
    let offset = 7u32;
    let _ = Delegate::<fn(u32) -> u32>::create_method(&gain, move |g: &Gain, x: u32| {
        g.0 * x + offset
    });
}

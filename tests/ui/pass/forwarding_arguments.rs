//! Parameter shapes a forwarding delegate accepts.

use delegates::{read_only, CommandDelegate, EventDelegate, ForwardingDelegate, ImmutableArgument, ReadOnly};
use zerocopy::Immutable;

#[derive(Immutable)]
struct Frame {
    _id: u32,
}

impl ReadOnly for Frame {}

read_only! {
    #[derive(Immutable)]
    struct Route<'a> {
        _frames: &'a [&'a Frame],
        _name: &'a str,
        _hops: Option<&'a u8>,
    }
}

#[derive(Clone, Copy)]
struct Reading {
    _value: f64,
}

impl ImmutableArgument for Reading {}

struct Hub<'a> {
    _frames: EventDelegate<'a, fn(&'a Frame, u8)>,
    _readings: CommandDelegate<'a, fn(Reading)>,
    _bytes: ForwardingDelegate<'a, fn(&'a [u8], *const Frame)>,
    _routes: EventDelegate<'a, fn(&'a Route<'a>, Route<'a>, &'a &'a Frame)>,
}

fn main() {
    let _ = Hub {
        _frames: EventDelegate::new(),
        _readings: CommandDelegate::new(),
        _bytes: ForwardingDelegate::new(),
        _routes: EventDelegate::new(),
    };
    let _: ForwardingDelegate<'static, fn(Option<u8>, [i16; 3], (bool, char))> =
        ForwardingDelegate::new();
    let _: ForwardingDelegate<'static, fn(String, Vec<u8>, Box<u32>)> = ForwardingDelegate::new();
    let _: ForwardingDelegate<'static, fn(fn(u32) -> u32)> = ForwardingDelegate::new();
    let _: ForwardingDelegate<'static, fn(&'static str)> = ForwardingDelegate::new();
}

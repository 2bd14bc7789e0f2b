//! Cruise control wired together with delegates.
//!
//! Run with `RUST_LOG=trace` to see every binding.

use std::cell::Cell;

use delegates::{CommandDelegate, EventDelegate};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Engine {
    running: Cell<bool>,
}

impl Engine {
    fn accelerate(&self) {
        self.running.set(true);
        println!("engine accelerating");
    }

    fn turn_off(&self) {
        self.running.set(false);
        println!("engine turned off");
    }
}

#[derive(Default)]
struct BrakingSystem {
    engaged: Cell<bool>,
}

impl BrakingSystem {
    fn on(&self) {
        self.engaged.set(true);
        println!("brakes on");
    }

    fn off(&self) {
        self.engaged.set(false);
        println!("brakes off");
    }
}

/// Binding a listener is optional for the sensor to work.
#[derive(Default)]
struct SpeedSensor<'a> {
    on_speed_changed: EventDelegate<'a, fn(f32)>,
}

/// Both commands are required for cruise control to work.
struct CruiseControl<'a> {
    target_kmh: Cell<f32>,
    accelerate: CommandDelegate<'a, fn()>,
    slow_down: CommandDelegate<'a, fn()>,
}

impl<'a> CruiseControl<'a> {
    fn new(accelerate: CommandDelegate<'a, fn()>, slow_down: CommandDelegate<'a, fn()>) -> Self {
        Self {
            target_kmh: Cell::new(0.0),
            accelerate,
            slow_down,
        }
    }

    fn set_target(&self, kmh: f32) {
        self.target_kmh.set(kmh);
    }

    fn update(&self, driving_kmh: f32) {
        let target = self.target_kmh.get();
        if driving_kmh < target * 0.95 {
            self.accelerate.call();
        } else if driving_kmh > target * 1.05 {
            self.slow_down.call();
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::default();
    let brakes = BrakingSystem::default();

    let speed_up = || {
        brakes.off();
        engine.accelerate();
    };
    let slow_down = || {
        engine.turn_off();
        brakes.on();
    };
    let cruise = CruiseControl::new(
        CommandDelegate::create(&speed_up),
        CommandDelegate::create(&slow_down),
    );

    let mut sensor = SpeedSensor::default();
    // Unbound: the reading is dropped.
    sensor.on_speed_changed.call(12.0);

    sensor.on_speed_changed = EventDelegate::create_method(&cruise, CruiseControl::update);

    cruise.set_target(25.0);
    for kmh in [20.0, 25.0, 30.0] {
        println!("speed {kmh} km/h");
        sensor.on_speed_changed.call(kmh);
    }

    sensor.on_speed_changed.reset();
    sensor.on_speed_changed.call(90.0);
    println!(
        "engine running: {}, brakes engaged: {}",
        engine.running.get(),
        brakes.engaged.get()
    );
}

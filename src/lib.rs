//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! The sensor talks over a single open-drain line. The driver pulls the line
//! low to request a conversion, releases it, and then times every level the
//! sensor drives by busy-polling once per microsecond. A data bit is a `1`
//! when its high pulse lasts longer than a fixed threshold. The fifth byte of
//! the frame is a checksum over the other four.
//!
//! # Features
//! - Blocking synchronous API; every wait is bounded by a tick budget
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following traits:
//! - [`Gpio`] for direction switching and level access on the data pin,
//!   implemented by [`OpenDrainPin`] for any `embedded-hal` open-drain pin
//! - [`DelayNs`] for accurate timing
//!
//! # Example
//!
//! ```ignore
//! let pin = OpenDrainPin::new(pin_driver, 4);
//! let mut dht = Dht11::new(pin, delay);
//! dht.init(4)?;
//!
//! loop {
//!     match dht.read() {
//!         Ok(reading) => queue.send(reading),
//!         Err(e) => log::warn!("DHT11: {e}"),
//!     }
//!     delay.delay_ms(1000);
//! }
//! ```
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs timeouts and checksum errors
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod dht11;
pub mod error;
pub mod frame;
pub mod gpio;
pub mod pulse;
pub mod reading;

pub use config::Config;
pub use dht11::Dht11;
pub use error::{DhtError, InitError, TimeoutKind};
pub use gpio::{Direction, Gpio, OpenDrainPin};
pub use pulse::PulseOutcome;
pub use reading::Reading;

#![no_std]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::pedantic)] // Be pedantic by default
#![allow(clippy::module_name_repetitions)]

//! # Usage
//!
//! A flashed binary picks one signature scheme and one iteration count at
//! compile time with [`speed_config!`], then hands the scheme, the board's
//! [`Hal`], and a message source to [`bench`]:
//!
//! ```ignore
//! sign_speed::speed_config!(pub Mayo1Speed, Mayo1, iterations = 10);
//!
//! sign_speed::bench::<Mayo1Speed, _, _>(Mayo1::default(), board, trng)?;
//! ```

#[cfg(any(feature = "std", test))]
extern crate std;

pub use rand_core;
pub use signature;

mod buffer;
mod config;
mod driver;
mod error;
pub mod hal;
pub mod params;
pub mod report;
mod scheme;
pub mod timing;

pub use crate::{
    buffer::Buffer,
    config::{Config, MLEN, message_len},
    driver::{KeyPair, Phase, SignedMessage, Speed, bench},
    error::{Error, Result},
    hal::{ClockMode, Hal},
    report::Measurement,
    scheme::SignatureScheme,
};

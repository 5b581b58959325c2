//! Seat strategies for automated play.
//!
//! A [`Strategy`] sees only an [`InfoState`](crate::round::InfoState) and
//! its own hand at flip time. The driver in [`game::driver`](crate::game::driver)
//! checks every returned move against the legal set.

pub mod strategy;
pub mod random;

pub use strategy::{FirstLegalStrategy, Strategy};
pub use random::RandomStrategy;

//! Tally
//!
//! Tally is a small checkout pricing core: an immutable catalog of unit
//! prices and "N units for P" multi-buy offers, a cart of scanned item
//! codes, and the arithmetic to total the cart at any point.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod pricing;

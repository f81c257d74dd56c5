//! # Data Module
//!
//! Entities and data providers for the shared SDK.
//!
//! ## Overview
//!
//! This module owns:
//! - The immutable [`User`](models::User) and [`Product`](models::Product) records
//! - Provider traits ([`UserRepository`], [`ProductRepository`]) that real
//!   network or storage backends implement
//! - Seeded in-memory providers with simulated latency, used by the demo hosts
//!
//! Providers perform no input validation; that is the query layer's job in
//! `core-service`.

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use error::{DataError, Result};
pub use models::{Product, User};
pub use repositories::{
    InMemoryProductRepository, InMemoryUserRepository, ProductRepository, UserRepository,
};

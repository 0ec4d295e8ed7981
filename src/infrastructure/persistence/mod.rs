//! PostgreSQL repository implementation.
//!
//! Concrete implementation of the domain repository trait using SQLx with
//! runtime-bound parameterized queries.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User profile, family, and transportation lookups

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;

//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. All of them
//! serialize to the wire format served by `GET /user/{id}` and double as the
//! cache payload format, so their Serde shape is part of the public contract.
//!
//! # Entity Types
//!
//! - [`UserProfile`] - Singleton profile record per user
//! - [`FamilyMember`] - Zero or more family rows per user
//! - [`Vehicle`] - Zero or more transportation rows per user
//! - [`UserDetail`] - The merged aggregate of the three

pub mod family_member;
pub mod user_detail;
pub mod user_profile;
pub mod vehicle;

pub use family_member::FamilyMember;
pub use user_detail::UserDetail;
pub use user_profile::UserProfile;
pub use vehicle::Vehicle;

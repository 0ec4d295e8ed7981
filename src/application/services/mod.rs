//! Business logic services for the application layer.

pub mod user_detail_service;

pub use user_detail_service::UserDetailService;

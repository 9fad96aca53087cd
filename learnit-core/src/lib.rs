//! Learnit Core
//!
//! Platform-agnostic domain logic for the Learnit rewards platform.
//! This crate provides the catalog, points, and OTP verification rules
//! without UI or platform-specific dependencies.

pub mod catalog;
pub mod otp;
pub mod points;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Category, CategoryFilter, Product};
pub use otp::{
    GENERIC_FAILURE, OTP_LEN, OtpForm, SlotEdit, VerifyPhase, VerifyReply, VerifyRequest,
};
pub use points::{PointsBalance, SIGNUP_GRANT};

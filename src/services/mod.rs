//! Service layer for domain operations.
//!
//! ARCHITECTURE
//! ============
//! Route handlers stay thin and delegate validation and outbound I/O here so
//! behavior is testable without HTTP.

pub mod contact;

//! # Builders
//!
//! This module provides builder patterns for constructing derivations.
//!
//! ## Modules
//!
//! - [`pbkdf2_builder`] - Builder for PBKDF2-HMAC requests
//!
//! ## Usage
//!
//! Builders provide a fluent API with strong defaults and optional customization.

pub mod pbkdf2_builder;

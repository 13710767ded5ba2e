// ABOUTME: Foundation crate for the Strava v3 API client
// ABOUTME: Domain models, resource-state reference data, paging types, and the error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strava Core
//!
//! Foundation crate providing shared types for the Strava API client. This
//! crate is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: the client-facing error taxonomy (`Error`, `Result`)
//! - **models**: domain records returned by the Strava API
//! - **paging**: page-window types and the paging policy configuration

/// Client-facing error taxonomy
pub mod errors;

/// Domain models (`Activity`, `Athlete`, `Club`, reference enums)
pub mod models;

/// Page-window types and paging policy configuration
pub mod paging;

//! Integration of external crates and foreign types.
//!
//! This module provides conversions between Tessel's [`Vector`] and the
//! vector types of commonly used linear algebra crates via [`FromGeometry`]
//! and [`IntoGeometry`]. Integrated crates are re-exported within a
//! sub-module, which can be used to avoid versioning conflicts.
//!
//! Integrations are enabled with Cargo features:
//!
//! | Crate      | Feature             | Types                          |
//! |------------|---------------------|--------------------------------|
//! | `glam`     | `geometry-glam`     | `DVec2`                        |
//! | `mint`     | `geometry-mint`     | `Point2<f64>`, `Vector2<f64>`  |
//! | `nalgebra` | `geometry-nalgebra` | `Point2<f64>`, `Vector2<f64>`  |
//!
//! The documentation for items re-exported from integrated crates is hidden.
//!
//! [`FromGeometry`]: crate::geometry::FromGeometry
//! [`IntoGeometry`]: crate::geometry::IntoGeometry
//! [`Vector`]: crate::geometry::Vector

// Feature modules. These are empty unless Cargo features are enabled.
pub mod glam;
pub mod mint;
pub mod nalgebra;

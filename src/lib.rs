//! # dxf-takeoff
//!
//! Manufacturing takeoff metrics from 2D DXF drawings.
//!
//! Given a drawing composed of lines, polylines, circles, arcs, and text
//! annotations, this library computes the aggregate figures a CAM or
//! manufacturing estimator needs without opening a CAD viewer:
//!
//! - total enclosed area
//! - bounding width and thickness
//! - total cut path length
//! - per-type entity census
//! - a derived weight estimate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_takeoff::Drawing;
//!
//! let drawing = Drawing::load_file("plate.dxf")?;
//! let metrics = drawing.measure();
//!
//! println!("area: {:.2}", metrics.total_area);
//! println!("cut length: {:.2}", metrics.cut_length);
//! # Ok::<(), dxf_takeoff::TakeoffError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`Primitive`] - closed variant type over the recognized entity set
//! - [`Drawing`] - the loaded primitive sequence plus loader diagnostics
//! - [`metrics`] - one pure visitor per metric, folded over the sequence
//! - [`DrawingMetrics`] - the aggregate result record
//!
//! DXF parsing is delegated to the `dxf` crate; this library only maps
//! parsed entities into its own primitive model. The measurement passes
//! are independent read-only traversals and run in parallel, while each
//! pass remains a deterministic sequential fold.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod metrics;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TakeoffError};
pub use types::{Extent, Vector2};

// Re-export entity types
pub use entities::{
    Arc, Circle, Line, LwPolyline, LwVertex, MText, Polyline, Primitive, PrimitiveKind, Text,
    Unknown,
};

// Re-export measurement types
pub use metrics::{measure, Census, DrawingMetrics};

// Re-export document
pub use document::Drawing;

// Re-export diagnostics
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

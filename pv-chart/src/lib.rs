//! Chart geometry for the pet vitals dashboard.
//!
//! This crate turns already-fetched telemetry series into drawable
//! primitives. Everything here is a pure function of its inputs: nothing
//! is cached between calls and no rendering happens.
//!
//! - [`curve`]: Catmull-Rom style smoothing for the mood line graph
//! - [`scale`]: value ranges and the value-to-pixel vertical mapping
//! - [`bar`]: range bars and gridlines for the heart-rate chart
//! - [`summary`]: min/max/selected reductions shown under a chart
//!
//! # Usage
//!
//! ```rust
//! use pv_chart::bar::BarLayout;
//! use pv_chart::curve::{path_data, smooth_path};
//! use pv_chart::geometry::Point;
//! use pv_chart::scale::ValueRange;
//!
//! let layout = BarLayout::default();
//! let range = ValueRange::new(40.0, 189.0);
//! let bars = layout.map_bars(&[90.0, 85.0], &[140.0, 130.0], range).unwrap();
//! assert_eq!(bars.len(), 2);
//! assert_eq!(bars[1].x, 46.0);
//!
//! let points = [Point::new(50.0, 100.0), Point::new(120.0, 60.0)];
//! let segments = smooth_path(&points);
//! assert_eq!(segments.len(), 1);
//! assert!(path_data(&segments).starts_with("M 50 100 C"));
//! ```

pub mod bar;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod summary;

pub use error::{ChartError, Result};

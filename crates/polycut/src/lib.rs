//! Snapping points onto polygon boundaries and splitting polygons along cut paths.
//!
//! The crate is a pure geometry engine. Given a simple polygon and a cut path
//! whose ends are snapped onto the boundary, it returns the two vertex loops on
//! either side of the cut. Pointer handling, rendering, and session state live
//! with the caller.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use polycut::{Cuttable, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(300.0, 0.0),
//!     Point2::new(300.0, 300.0),
//!     Point2::new(0.0, 300.0),
//! ]);
//!
//! let cut = [Point2::new(150.0, -10.0), Point2::new(150.0, 310.0)];
//! let split = square.split(&cut).unwrap();
//!
//! assert_eq!(split.first.len(), 4);
//! assert_eq!(split.second.len(), 4);
//! ```

mod cuttable;
mod error;
mod polygon;
mod rectangle;
mod segment;

pub use cuttable::{split_polygon, CutPath, Cuttable, Split};
pub use error::{CutError, Result};
pub use polygon::{Polygon, Projection};
pub use rectangle::Rectangle;
pub use segment::{Segment, SegmentProjection};

//! Winning-line geometry.
//!
//! Maps a winning line to the pixel segment that strikes through it. The
//! coordinates belong to a fixed rendering of the grid ([`GRID_FRAME`]);
//! presentations with other dimensions scale from that frame.

use super::position::Position;
use super::rules::WinResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Height of the bar drawn along a segment, in pixels.
pub const BAR_HEIGHT: f64 = 2.0;

/// Pixel rectangle the geometry table is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelFrame {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

/// The grid's extent: every segment in [`LINE_TABLE`] lies inside it.
pub const GRID_FRAME: PixelFrame = PixelFrame {
    left: 20.0,
    top: 47.0,
    right: 120.0,
    bottom: 146.0,
};

/// A straight line from a start point to an end point.
///
/// The default is the zero-length segment at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Start x.
    pub start_x: f64,
    /// Start y.
    pub start_y: f64,
    /// End x.
    pub end_x: f64,
    /// End y.
    pub end_y: f64,
}

/// Placement of a bar of [`BAR_HEIGHT`] drawn horizontally and then
/// rotated about the middle of its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Left edge of the unrotated bar.
    pub left: f64,
    /// Top edge of the unrotated bar.
    pub top: f64,
    /// Bar length.
    pub width: f64,
    /// Bar thickness.
    pub height: f64,
    /// Clockwise rotation in degrees (y grows downward).
    pub rotation_degrees: f64,
}

impl Segment {
    /// Creates a segment from its endpoints.
    pub const fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Horizontal extent.
    pub fn dx(&self) -> f64 {
        self.end_x - self.start_x
    }

    /// Vertical extent.
    pub fn dy(&self) -> f64 {
        self.end_y - self.start_y
    }

    /// Direction of the segment, `atan2(dy, dx)` in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.dy().atan2(self.dx()).to_degrees()
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Zero-length segments draw nothing.
    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0
    }

    /// Placement of a bar running from start to end.
    pub fn bar(&self) -> Bar {
        Bar {
            left: self.start_x,
            top: self.start_y,
            width: self.length(),
            height: BAR_HEIGHT,
            rotation_degrees: self.angle_degrees(),
        }
    }
}

/// One row of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEntry {
    /// First square of the winning line.
    pub first: Position,
    /// Second square of the winning line.
    pub second: Position,
    /// Segment striking through the line.
    pub segment: Segment,
}

const fn entry(first: Position, second: Position, segment: Segment) -> LineEntry {
    LineEntry {
        first,
        second,
        segment,
    }
}

/// Segments for all eight winning lines, keyed by their first two squares.
///
/// The diagonals share their endpoints' y values and swap their x values.
pub const LINE_TABLE: [LineEntry; 8] = [
    // Rows
    entry(Position::TopLeft, Position::TopCenter, Segment::new(20.0, 64.0, 120.0, 64.0)),
    entry(Position::MiddleLeft, Position::Center, Segment::new(20.0, 97.0, 120.0, 97.0)),
    entry(Position::BottomLeft, Position::BottomCenter, Segment::new(20.0, 129.0, 120.0, 129.0)),
    // Columns
    entry(Position::TopLeft, Position::MiddleLeft, Segment::new(36.0, 47.0, 36.0, 146.0)),
    entry(Position::TopCenter, Position::Center, Segment::new(69.0, 47.0, 69.0, 146.0)),
    entry(Position::TopRight, Position::MiddleRight, Segment::new(102.0, 47.0, 102.0, 146.0)),
    // Diagonals
    entry(Position::TopLeft, Position::Center, Segment::new(20.0, 47.0, 120.0, 146.0)),
    entry(Position::TopRight, Position::Center, Segment::new(120.0, 47.0, 20.0, 146.0)),
];

/// Geometry lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GeometryError {
    /// The pair does not start any winning line.
    #[display("No winning line starts with {}-{}", first.to_index(), second.to_index())]
    UnknownLine {
        /// First square of the pair.
        first: Position,
        /// Second square of the pair.
        second: Position,
    },
}

impl std::error::Error for GeometryError {}

/// Looks up the segment for a winning line given its first two squares.
///
/// # Errors
///
/// Returns [`GeometryError::UnknownLine`] when the pair is not the start of
/// one of the eight lines.
#[instrument]
pub fn line_for(first: Position, second: Position) -> Result<Segment, GeometryError> {
    LINE_TABLE
        .iter()
        .find(|e| e.first == first && e.second == second)
        .map(|e| {
            debug!(segment = ?e.segment, "Resolved winning line");
            e.segment
        })
        .ok_or_else(|| {
            warn!("No segment for line key");
            GeometryError::UnknownLine { first, second }
        })
}

/// Segment for a detected win.
#[instrument(skip(win), fields(player = %win.player))]
pub fn line_for_win(win: &WinResult) -> Result<Segment, GeometryError> {
    let (first, second) = win.key();
    line_for(first, second)
}

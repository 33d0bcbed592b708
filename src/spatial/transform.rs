//! The eight orientations of a square grid
//!
//! Every composition of quarter turns and mirror flips lands on exactly one
//! member of [`Transformation`], so trying each member once enumerates every
//! distinct presentation of a grid. Rotations are counter-clockwise.
//!
//! Each member is stored as an optional transpose followed by optional
//! row and column reversals. Those three bits are unique per member, which
//! makes `compose` and `inverse` simple bit arithmetic instead of a lookup.

use ndarray::{Array2, ArrayView2, Axis};

/// One of the eight symmetries of a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Transformation {
    /// Leave the grid unchanged
    Identity,
    /// Mirror left-to-right
    FlipHorizontal,
    /// Mirror top-to-bottom
    FlipVertical,
    /// Quarter turn counter-clockwise
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three quarter turns counter-clockwise
    Rotate270,
    /// Quarter turn counter-clockwise, then mirror left-to-right
    Rotate90FlipHorizontal,
    /// Quarter turn counter-clockwise, then mirror top-to-bottom
    Rotate90FlipVertical,
}

/// Decomposition into view operations applied in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    transpose: bool,
    reverse_rows: bool,
    reverse_cols: bool,
}

impl Transformation {
    /// All members in declaration order, which is also the search order
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Rotate90FlipHorizontal,
        Self::Rotate90FlipVertical,
    ];

    /// Position of this member within [`Self::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn parts(self) -> Parts {
        let (transpose, reverse_rows, reverse_cols) = match self {
            Self::Identity => (false, false, false),
            Self::FlipHorizontal => (false, false, true),
            Self::FlipVertical => (false, true, false),
            Self::Rotate180 => (false, true, true),
            Self::Rotate90 => (true, true, false),
            Self::Rotate270 => (true, false, true),
            Self::Rotate90FlipHorizontal => (true, true, true),
            Self::Rotate90FlipVertical => (true, false, false),
        };
        Parts {
            transpose,
            reverse_rows,
            reverse_cols,
        }
    }

    const fn from_parts(parts: Parts) -> Self {
        match (parts.transpose, parts.reverse_rows, parts.reverse_cols) {
            (false, false, false) => Self::Identity,
            (false, false, true) => Self::FlipHorizontal,
            (false, true, false) => Self::FlipVertical,
            (false, true, true) => Self::Rotate180,
            (true, true, false) => Self::Rotate90,
            (true, false, true) => Self::Rotate270,
            (true, true, true) => Self::Rotate90FlipHorizontal,
            (true, false, false) => Self::Rotate90FlipVertical,
        }
    }

    /// The single member equivalent to applying `self` and then `next`
    #[must_use]
    pub const fn then(self, next: Self) -> Self {
        let first = self.parts();
        let second = next.parts();

        // Reversals applied before a transpose swap axes when moved after it
        let (rows, cols) = if second.transpose {
            (first.reverse_cols, first.reverse_rows)
        } else {
            (first.reverse_rows, first.reverse_cols)
        };

        Self::from_parts(Parts {
            transpose: first.transpose ^ second.transpose,
            reverse_rows: rows ^ second.reverse_rows,
            reverse_cols: cols ^ second.reverse_cols,
        })
    }

    /// Compose two members: `compose(a, b)` applies `a` first
    #[must_use]
    pub const fn compose(first: Self, second: Self) -> Self {
        first.then(second)
    }

    /// The member that undoes `self`
    #[must_use]
    pub const fn inverse(self) -> Self {
        let parts = self.parts();
        if parts.transpose {
            Self::from_parts(Parts {
                transpose: true,
                reverse_rows: parts.reverse_cols,
                reverse_cols: parts.reverse_rows,
            })
        } else {
            // Pure reversals are involutions
            self
        }
    }

    /// Zero-copy transformed view of a grid
    pub fn view<'a, T>(self, grid: ArrayView2<'a, T>) -> ArrayView2<'a, T> {
        let parts = self.parts();
        let mut view = grid;
        if parts.transpose {
            view.swap_axes(0, 1);
        }
        if parts.reverse_rows {
            view.invert_axis(Axis(0));
        }
        if parts.reverse_cols {
            view.invert_axis(Axis(1));
        }
        view
    }

    /// Apply to a grid, producing an owned grid in standard layout
    pub fn apply<T: Clone>(self, grid: ArrayView2<'_, T>) -> Array2<T> {
        self.view(grid).as_standard_layout().into_owned()
    }
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::FlipHorizontal => "flip-horizontal",
            Self::FlipVertical => "flip-vertical",
            Self::Rotate90 => "rotate-90",
            Self::Rotate180 => "rotate-180",
            Self::Rotate270 => "rotate-270",
            Self::Rotate90FlipHorizontal => "rotate-90-flip-horizontal",
            Self::Rotate90FlipVertical => "rotate-90-flip-vertical",
        };
        f.write_str(name)
    }
}

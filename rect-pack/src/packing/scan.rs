use crate::geometry::primitives::{Point, Rect, Vector};

/// Stage of the grid scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No rectangle placed yet, stepping with the search spacing
    Searching,
    /// At least one rectangle placed, stepping with the footprint of the rectangle
    Fitted,
}

/// Step sizes of the grid along the world axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steps {
    pub x: f64,
    pub y: f64,
}

impl Steps {
    pub fn uniform(step: f64) -> Self {
        Steps { x: step, y: step }
    }

    pub fn swapped(self) -> Self {
        Steps {
            x: self.y,
            y: self.x,
        }
    }
}

/// State of the row-major scan over a boundary's bounding box.
/// Rows run along x, starting at `x_origin`; rows are stacked along y.
/// All transitions return a new state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanState {
    pub phase: Phase,
    /// Current grid coordinate
    pub cursor: Point,
    /// Most recently composed candidate anchor, starts at the minimum of the bounding box
    pub anchor: Point,
    /// x-coordinate at which every row starts
    pub x_origin: f64,
    /// Step sizes in effect
    pub steps: Steps,
}

impl ScanState {
    pub fn new(bbox: &Rect, search_spacing: f64) -> Self {
        ScanState {
            phase: Phase::Searching,
            cursor: bbox.min(),
            anchor: bbox.min(),
            x_origin: bbox.x_min,
            steps: Steps::uniform(search_spacing),
        }
    }

    /// The fallback rotation is only attempted once the scan is aligned to a first fit
    pub fn rotation_allowed(&self) -> bool {
        self.phase == Phase::Fitted
    }

    pub fn row_has_next(&self, bbox: &Rect) -> bool {
        self.cursor.0 < bbox.x_max
    }

    pub fn has_next_row(&self, bbox: &Rect) -> bool {
        self.cursor.1 < bbox.y_max
    }

    /// Composes the candidate anchor of the current cell as the cursor plus a grid offset,
    /// and makes it the running anchor.
    /// Without an `axis_offset`, the previous running anchor serves as the offset.
    /// Returns the new state and the offset used.
    pub fn compose_anchor(self, axis_offset: Option<Vector>) -> (Self, Vector) {
        let grid_offset = axis_offset.unwrap_or_else(|| Vector::from(self.anchor));
        let next = ScanState {
            anchor: self.cursor + grid_offset,
            ..self
        };
        (next, grid_offset)
    }

    /// Moves the cursor one column to the right
    pub fn advance_column(self) -> Self {
        let Point(x, y) = self.cursor;
        ScanState {
            cursor: Point(x + self.steps.x, y),
            ..self
        }
    }

    /// Moves the cursor to the start of the next row
    pub fn advance_row(self) -> Self {
        let Point(_, y) = self.cursor;
        ScanState {
            cursor: Point(self.x_origin, y + self.steps.y),
            ..self
        }
    }

    /// Registers a placement at the current cursor.
    /// The first placement ends the search: the grid switches to `fitted_steps`
    /// and future rows start on the column lattice passing through the cursor.
    /// A rotated placement turns the footprint: the step sizes are swapped and stay
    /// that way until the next rotated placement swaps them back.
    pub fn on_placement(self, rotated: bool, fitted_steps: Steps, bbox: &Rect) -> Self {
        let mut next = self;
        if self.phase == Phase::Searching {
            next.phase = Phase::Fitted;
            next.steps = fitted_steps;
            next.x_origin = realign(bbox.x_min, self.cursor.0, fitted_steps.x);
        }
        if rotated {
            next.steps = next.steps.swapped();
        }
        next
    }
}

/// Leftmost coordinate at or after `min` which lies on the lattice through `x` with spacing `step`
fn realign(min: f64, x: f64, step: f64) -> f64 {
    let n_steps = ((x - min) / step).floor();
    x - n_steps * step
}

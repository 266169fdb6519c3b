//! Plate shape descriptor and node classification.
//!
//! The plate occupies the grid left of a diagonal cut and carries a
//! rectangular cavity:
//!
//! ```text
//!     +---------+
//!     |          \
//!     |  +----+   \
//!     |  |    |    \
//!     |  +----+     \
//!     |              \
//!     +---------------+
//! ```
//!
//! Row `y = 0` is the ceiling and row `y = height - 1` the floor.
//! The ceiling is held at a fixed temperature up to the half line, where the
//! inclined side starts and runs down to the bottom-right corner.
//! The left edge is insulated, and the cavity walls exchange heat with the
//! cavity through Robin conditions.

use tracing::{debug, warn};

use super::{Condition, Node};

/// Fractional landmarks defining the plate shape.
///
/// All fractions are of the grid width (`x`) or height (`y`) and are clamped
/// to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Position of the half line where the ceiling ends and the cut begins.
    pub half_line: f64,

    /// Cavity bounds, or `None` for a plate without a cavity.
    pub cavity: Option<CavityBounds>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            half_line: 0.5,
            cavity: Some(CavityBounds::default()),
        }
    }
}

/// Fractional position of the cavity walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CavityBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for CavityBounds {
    fn default() -> Self {
        Self {
            left: 0.2,
            right: 0.5,
            top: 0.3,
            bottom: 0.7,
        }
    }
}

/// Boundary and initial temperatures of the plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures {
    /// Ceiling and inclined side.
    pub ceiling: f64,

    /// Floor.
    pub floor: f64,

    /// Starting value of every free node.
    pub initial: f64,

    /// Ambient value the Robin walls exchange heat with.
    ///
    /// Zero gives the homogeneous Robin condition.
    pub cavity: f64,

    /// Probe value carried by nodes outside the plate.
    pub outside: f64,
}

impl Default for Temperatures {
    fn default() -> Self {
        Self {
            ceiling: 80.0,
            floor: 50.0,
            initial: 50.0,
            cavity: 50.0,
            outside: 0.0,
        }
    }
}

/// Resolved cavity wall indices (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cavity {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Cavity {
    /// Returns `true` if `(x, y)` lies on the cavity walls or inside it.
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}

/// Classified nodes of a plate.
pub(super) struct Layout {
    pub(super) nodes: Vec<Node>,
    pub(super) cavity: Option<Cavity>,
}

/// Tags every node of a `width × height` grid.
///
/// Both dimensions must be at least 2.
pub(super) fn classify(
    width: usize,
    height: usize,
    geometry: &Geometry,
    temps: &Temperatures,
) -> Layout {
    let mut tags: Vec<Option<Node>> = vec![None; width * height];
    let index = |x: usize, y: usize| x + y * width;

    let half = fraction_of(geometry.half_line, width).clamp(1, width - 1);
    let slope = (width - 1 - half) as f64 / (height - 1) as f64;
    let beyond_cut = |x: usize, y: usize| x as f64 > half as f64 + y as f64 * slope + 1e-9;

    for y in 0..height {
        for x in 0..width {
            if beyond_cut(x, y) {
                tags[index(x, y)] = Some(Node::fixed(Condition::Outside, temps.outside));
            }
        }
    }

    for x in 0..width {
        tags[index(x, height - 1)] = Some(Node::fixed(Condition::Dirichlet, temps.floor));
    }
    for x in 0..half {
        tags[index(x, 0)] = Some(Node::fixed(Condition::Dirichlet, temps.ceiling));
    }

    // Inclined side: every plate node touching the cut.
    for y in 0..height {
        for x in 0..width {
            if tags[index(x, y)].is_some() {
                continue;
            }
            let touches_cut = (x + 1 < width && beyond_cut(x + 1, y))
                || (y > 0 && beyond_cut(x, y - 1))
                || (y + 1 < height && beyond_cut(x, y + 1));
            if touches_cut || x == width - 1 {
                tags[index(x, y)] = Some(Node::fixed(Condition::Dirichlet, temps.ceiling));
            }
        }
    }

    for y in 1..height - 1 {
        let tag = &mut tags[index(0, y)];
        if tag.is_none() {
            *tag = Some(Node::free(Condition::NeumannX, temps.initial));
        }
    }

    let cavity = geometry
        .cavity
        .and_then(|bounds| resolve_cavity(&bounds, width, height, &tags));

    match (geometry.cavity, cavity) {
        (Some(bounds), None) => warn!(width, height, ?bounds, "grid too coarse for cavity"),
        (_, Some(cavity)) => carve_cavity(&cavity, temps, &mut tags, width),
        (None, None) => {}
    }

    let nodes = tags
        .into_iter()
        .map(|tag| tag.unwrap_or_else(|| Node::free(Condition::Interior, temps.initial)))
        .collect();

    debug!(width, height, half, ?cavity, "classified plate nodes");

    Layout { nodes, cavity }
}

fn fraction_of(fraction: f64, dim: usize) -> usize {
    (fraction.clamp(0.0, 1.0) * dim as f64) as usize
}

/// Places the cavity so that a free node separates its walls from every
/// other boundary, or returns `None` if it no longer has a strict interior.
fn resolve_cavity(
    bounds: &CavityBounds,
    width: usize,
    height: usize,
    tags: &[Option<Node>],
) -> Option<Cavity> {
    let (left, right) = ordered(fraction_of(bounds.left, width), fraction_of(bounds.right, width));
    let (top, bottom) = ordered(fraction_of(bounds.top, height), fraction_of(bounds.bottom, height));

    let left = left.max(2);
    let top = top.max(2);
    let bottom = bottom.min(height.checked_sub(3)?);
    if bottom < top + 2 {
        return None;
    }

    // First tagged column to the right of the insulated edge, per row.
    let limit = (top - 1..=bottom + 1)
        .map(|y| {
            (1..width)
                .find(|&x| tags[x + y * width].is_some())
                .unwrap_or(width)
        })
        .min()?;
    let right = right.min(limit.checked_sub(2)?);
    if right < left + 2 {
        return None;
    }

    Some(Cavity {
        left,
        right,
        top,
        bottom,
    })
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

fn carve_cavity(cavity: &Cavity, temps: &Temperatures, tags: &mut [Option<Node>], width: usize) {
    for y in cavity.top..=cavity.bottom {
        for x in cavity.left..=cavity.right {
            let side = x == cavity.left || x == cavity.right;
            let end = y == cavity.top || y == cavity.bottom;
            let node = match (side, end) {
                (true, true) => Node::free(Condition::RobinXY, temps.initial),
                (true, false) => Node::free(Condition::RobinX, temps.initial),
                (false, true) => Node::free(Condition::RobinY, temps.initial),
                (false, false) => Node::fixed(Condition::Outside, temps.outside),
            };
            tags[x + y * width] = Some(node);
        }
    }
}

//! Canvas bounds and the cat's forbidden zone
//!
//! Canvas space: pixels, origin top-left, +y down. The canvas rectangle is
//! closed, so points exactly on an edge are inside.

use glam::DVec2;

use crate::consts::CANVAS_PADDING;

/// Drawing surface size. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size a 4:3 canvas into a client area, leaving room for the border
    ///
    /// Landscape areas are fitted by height, portrait ones by width.
    /// Returns `None` when the client area is too small to hold anything.
    pub fn fit_4x3(client_width: f64, client_height: f64) -> Option<Self> {
        let (width, height) = if client_width > client_height {
            let height = client_height - CANVAS_PADDING;
            (height / 3.0 * 4.0 - CANVAS_PADDING, height)
        } else {
            let width = client_width - CANVAS_PADDING;
            (width, width / 4.0 * 3.0 - CANVAS_PADDING)
        };

        let bounds = Self::new(width.floor(), height.floor());
        bounds.is_usable().then_some(bounds)
    }

    /// Both sides positive and finite
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Nearest point inside the canvas
    #[inline]
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Shrink by `margin` on every side
    ///
    /// The returned bounds are in a frame shifted by `margin` on both axes;
    /// callers translate points in and out. `None` if nothing is left.
    pub fn inset(&self, margin: f64) -> Option<Self> {
        let inset = Self::new(self.width - 2.0 * margin, self.height - 2.0 * margin);
        inset.is_usable().then_some(inset)
    }
}

/// Keep-away disk around the cat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForbiddenZone {
    pub center: DVec2,
    pub radius: f64,
}

impl ForbiddenZone {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Strictly inside the disk (points on the circle are safe)
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.distance(self.center) < self.radius
    }

    /// Same zone expressed in a frame shifted by `offset`
    #[inline]
    pub fn translated(&self, offset: DVec2) -> Self {
        Self::new(self.center + offset, self.radius)
    }
}

//! Planar shape model
//!
//! The output of a conversion is a list of [`Shape`]s: either a [`Path`]
//! (move/line/curve/arc commands) or one of the closed primitives
//! (circle, ellipse, circular arc). All of them share a bounds contract
//! and can be mapped through a [`Transform2`]; arcs and ellipses stay
//! exact under similarity transforms and degrade to cubic Beziers under
//! general affine maps.
//!
//! Angle convention: the point of a circular arc at angle `a` degrees is
//! `center + r * (cos a, -sin a)`. Positive extents therefore sweep toward
//! negative Y. The DXF entity interpreters encode their counterclockwise
//! drawing-space sweeps as negative extents in this convention; the
//! finalizer's Y-flip turns them back around for output.

use crate::types::{Bounds, Transform2, TransformKind, Vector2};

/// A circular arc segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSeg {
    /// Center of the underlying circle
    pub center: Vector2,
    /// Radius of the underlying circle
    pub radius: f64,
    /// Start angle in degrees
    pub start: f64,
    /// Angular extent in degrees (signed)
    pub extent: f64,
}

impl ArcSeg {
    /// Create a new arc segment
    pub fn new(center: Vector2, radius: f64, start: f64, extent: f64) -> Self {
        ArcSeg {
            center,
            radius,
            start,
            extent,
        }
    }

    /// Point at parameter `t` in `[0, 1]` along the sweep
    pub fn point_at(&self, t: f64) -> Vector2 {
        let angle = (self.start + self.extent * t).to_radians();
        Vector2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y - self.radius * angle.sin(),
        )
    }

    /// Start point of the sweep
    pub fn start_point(&self) -> Vector2 {
        self.point_at(0.0)
    }

    /// End point of the sweep
    pub fn end_point(&self) -> Vector2 {
        self.point_at(1.0)
    }

    /// Bounding rectangle: the full-circle frame
    pub fn bounds(&self) -> Bounds {
        let r = Vector2::new(self.radius, self.radius);
        Bounds::new(self.center - r, self.center + r)
    }

    /// Map through a similarity transform, staying an exact circular arc.
    fn map_similarity(&self, t: &Transform2, scale: f64, reflected: bool) -> ArcSeg {
        let center = t.apply(self.center);
        let radius = self.radius * scale;
        let d = t.apply(self.start_point()) - center;
        let start = if d.length() > 1e-12 {
            (-d.y).atan2(d.x).to_degrees()
        } else {
            0.0
        };
        let extent = if reflected { -self.extent } else { self.extent };
        ArcSeg {
            center,
            radius,
            start,
            extent,
        }
    }

    /// Approximate the sweep as cubic Bezier segments (at most 90 degrees
    /// per segment), returned as `(control1, control2, end)` triples that
    /// continue from the arc's start point.
    pub fn to_beziers(&self) -> Vec<(Vector2, Vector2, Vector2)> {
        let n = ((self.extent.abs() / 90.0).ceil() as usize).max(1);
        let step = self.extent / n as f64;
        let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let a0 = (self.start + step * i as f64).to_radians();
            let a1 = (self.start + step * (i + 1) as f64).to_radians();
            let p0 = Vector2::new(
                self.center.x + self.radius * a0.cos(),
                self.center.y - self.radius * a0.sin(),
            );
            let p1 = Vector2::new(
                self.center.x + self.radius * a1.cos(),
                self.center.y - self.radius * a1.sin(),
            );
            let t0 = Vector2::new(-a0.sin(), -a0.cos()) * self.radius;
            let t1 = Vector2::new(-a1.sin(), -a1.cos()) * self.radius;
            out.push((p0 + t0 * k, p1 - t1 * k, p1));
        }
        out
    }
}

/// An elliptical arc segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArcSeg {
    /// Center of the ellipse
    pub center: Vector2,
    /// Semi-axis along the ellipse's local X
    pub rx: f64,
    /// Semi-axis along the ellipse's local Y
    pub ry: f64,
    /// Rotation of the ellipse frame in radians
    pub rotation: f64,
    /// Start angle in degrees
    pub start: f64,
    /// Angular extent in degrees (signed)
    pub extent: f64,
}

impl EllipticalArcSeg {
    /// Create a new elliptical arc segment
    pub fn new(
        center: Vector2,
        rx: f64,
        ry: f64,
        rotation: f64,
        start: f64,
        extent: f64,
    ) -> Self {
        EllipticalArcSeg {
            center,
            rx,
            ry,
            rotation,
            start,
            extent,
        }
    }

    fn local_to_world(&self, local: Vector2) -> Vector2 {
        let cos = self.rotation.cos();
        let sin = self.rotation.sin();
        Vector2::new(
            self.center.x + local.x * cos - local.y * sin,
            self.center.y + local.x * sin + local.y * cos,
        )
    }

    /// Point at parameter `t` in `[0, 1]` along the sweep
    pub fn point_at(&self, t: f64) -> Vector2 {
        let angle = (self.start + self.extent * t).to_radians();
        self.local_to_world(Vector2::new(
            self.rx * angle.cos(),
            -self.ry * angle.sin(),
        ))
    }

    /// Start point of the sweep
    pub fn start_point(&self) -> Vector2 {
        self.point_at(0.0)
    }

    /// Bounding rectangle: the frame of the full rotated ellipse
    pub fn bounds(&self) -> Bounds {
        let cos = self.rotation.cos();
        let sin = self.rotation.sin();
        let ex = ((self.rx * cos).powi(2) + (self.ry * sin).powi(2)).sqrt();
        let ey = ((self.rx * sin).powi(2) + (self.ry * cos).powi(2)).sqrt();
        Bounds::new(
            Vector2::new(self.center.x - ex, self.center.y - ey),
            Vector2::new(self.center.x + ex, self.center.y + ey),
        )
    }

    /// Map through a similarity transform, staying an exact elliptical arc.
    fn map_similarity(&self, t: &Transform2, scale: f64, rotation: f64, reflected: bool) -> Self {
        let center = t.apply(self.center);
        let rx = self.rx * scale;
        let ry = self.ry * scale;
        let rot = if reflected {
            rotation - self.rotation
        } else {
            rotation + self.rotation
        };
        // Recover the start parameter by sampling the transformed start point
        // in the new ellipse frame.
        let d = t.apply(self.start_point()) - center;
        let cos = rot.cos();
        let sin = rot.sin();
        let local = Vector2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos);
        let start = if rx > 1e-12 && ry > 1e-12 {
            (-local.y / ry).atan2(local.x / rx).to_degrees()
        } else {
            0.0
        };
        let extent = if reflected { -self.extent } else { self.extent };
        EllipticalArcSeg {
            center,
            rx,
            ry,
            rotation: rot,
            start,
            extent,
        }
    }

    /// Approximate the sweep as cubic Bezier segments, as [`ArcSeg::to_beziers`].
    pub fn to_beziers(&self) -> Vec<(Vector2, Vector2, Vector2)> {
        let n = ((self.extent.abs() / 90.0).ceil() as usize).max(1);
        let step = self.extent / n as f64;
        let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let a0 = (self.start + step * i as f64).to_radians();
            let a1 = (self.start + step * (i + 1) as f64).to_radians();
            let p0 = self.local_to_world(Vector2::new(self.rx * a0.cos(), -self.ry * a0.sin()));
            let p1 = self.local_to_world(Vector2::new(self.rx * a1.cos(), -self.ry * a1.sin()));
            let d0 = self.tangent_at(a0);
            let d1 = self.tangent_at(a1);
            out.push((p0 + d0 * k, p1 - d1 * k, p1));
        }
        out
    }

    fn tangent_at(&self, angle: f64) -> Vector2 {
        let cos = self.rotation.cos();
        let sin = self.rotation.sin();
        let lx = -self.rx * angle.sin();
        let ly = -self.ry * angle.cos();
        Vector2::new(lx * cos - ly * sin, lx * sin + ly * cos)
    }
}

/// A single path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Start a new subpath at the given point
    MoveTo(Vector2),
    /// Straight edge to the given point
    LineTo(Vector2),
    /// Cubic Bezier edge
    CurveTo {
        /// First control point
        c1: Vector2,
        /// Second control point
        c2: Vector2,
        /// End point
        to: Vector2,
    },
    /// Circular arc segment (carries its own absolute geometry)
    Arc(ArcSeg),
    /// Elliptical arc segment (carries its own absolute geometry)
    EllipticalArc(EllipticalArcSeg),
    /// Close the current subpath
    Close,
}

/// An ordered sequence of path commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Path { cmds: Vec::new() }
    }

    /// Start a new subpath
    pub fn move_to(&mut self, p: Vector2) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    /// Add a straight edge
    pub fn line_to(&mut self, p: Vector2) {
        self.cmds.push(PathCmd::LineTo(p));
    }

    /// Add a cubic Bezier edge
    pub fn curve_to(&mut self, c1: Vector2, c2: Vector2, to: Vector2) {
        self.cmds.push(PathCmd::CurveTo { c1, c2, to });
    }

    /// Add a circular arc segment
    pub fn arc(&mut self, seg: ArcSeg) {
        self.cmds.push(PathCmd::Arc(seg));
    }

    /// Add an elliptical arc segment
    pub fn elliptical_arc(&mut self, seg: EllipticalArcSeg) {
        self.cmds.push(PathCmd::EllipticalArc(seg));
    }

    /// Close the current subpath
    pub fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// The command sequence
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// Whether the path holds no commands
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Append another path's commands (subpaths stay separate)
    pub fn append(&mut self, other: Path) {
        self.cmds.extend(other.cmds);
    }

    /// Bounding rectangle over every command. Control points of Bezier
    /// edges are included, arc segments contribute their circle frames.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        let mut include = |b: Bounds| {
            bounds = Some(match bounds {
                Some(acc) => acc.merge(&b),
                None => b,
            });
        };
        for cmd in &self.cmds {
            match cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => include(Bounds::from_point(*p)),
                PathCmd::CurveTo { c1, c2, to } => {
                    include(Bounds::from_point(*c1));
                    include(Bounds::from_point(*c2));
                    include(Bounds::from_point(*to));
                }
                PathCmd::Arc(seg) => include(seg.bounds()),
                PathCmd::EllipticalArc(seg) => include(seg.bounds()),
                PathCmd::Close => {}
            }
        }
        bounds
    }

    /// Map the path through an affine transform. Arc segments stay arcs
    /// under similarities and become Bezier chains otherwise.
    pub fn transformed(&self, t: &Transform2) -> Path {
        let kind = t.classify();
        let mut out = Path::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => out.move_to(t.apply(p)),
                PathCmd::LineTo(p) => out.line_to(t.apply(p)),
                PathCmd::CurveTo { c1, c2, to } => {
                    out.curve_to(t.apply(c1), t.apply(c2), t.apply(to))
                }
                PathCmd::Arc(seg) => match kind {
                    TransformKind::Similarity {
                        scale, reflected, ..
                    } => out.arc(seg.map_similarity(t, scale, reflected)),
                    TransformKind::General => {
                        for (c1, c2, to) in seg.to_beziers() {
                            out.curve_to(t.apply(c1), t.apply(c2), t.apply(to));
                        }
                    }
                },
                PathCmd::EllipticalArc(seg) => match kind {
                    TransformKind::Similarity {
                        scale,
                        rotation,
                        reflected,
                    } => out.elliptical_arc(seg.map_similarity(t, scale, rotation, reflected)),
                    TransformKind::General => {
                        for (c1, c2, to) in seg.to_beziers() {
                            out.curve_to(t.apply(c1), t.apply(c2), t.apply(to));
                        }
                    }
                },
                PathCmd::Close => out.close(),
            }
        }
        out
    }
}

/// A resolved planar shape
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A general path
    Path(Path),
    /// A full circle
    Circle {
        /// Center point
        center: Vector2,
        /// Radius
        radius: f64,
    },
    /// A full (possibly rotated) ellipse
    Ellipse {
        /// Center point
        center: Vector2,
        /// Semi-major axis
        rx: f64,
        /// Semi-minor axis
        ry: f64,
        /// Rotation of the major axis in radians
        rotation: f64,
    },
    /// A circular arc
    Arc(ArcSeg),
}

impl Shape {
    /// Bounding rectangle of the shape
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Path(path) => path.bounds(),
            Shape::Circle { center, radius } => {
                let r = Vector2::new(*radius, *radius);
                Some(Bounds::new(*center - r, *center + r))
            }
            Shape::Ellipse {
                center,
                rx,
                ry,
                rotation,
            } => Some(
                EllipticalArcSeg::new(*center, *rx, *ry, *rotation, 0.0, 360.0).bounds(),
            ),
            Shape::Arc(seg) => Some(seg.bounds()),
        }
    }

    /// Convert into path form. Primitives become a `MoveTo` plus a single
    /// full-sweep arc command.
    pub fn to_path(&self) -> Path {
        match self {
            Shape::Path(path) => path.clone(),
            Shape::Circle { center, radius } => {
                let seg = ArcSeg::new(*center, *radius, 0.0, 360.0);
                let mut path = Path::new();
                path.move_to(seg.start_point());
                path.arc(seg);
                path
            }
            Shape::Ellipse {
                center,
                rx,
                ry,
                rotation,
            } => {
                let seg = EllipticalArcSeg::new(*center, *rx, *ry, *rotation, 0.0, 360.0);
                let mut path = Path::new();
                path.move_to(seg.start_point());
                path.elliptical_arc(seg);
                path
            }
            Shape::Arc(seg) => {
                let mut path = Path::new();
                path.move_to(seg.start_point());
                path.arc(*seg);
                path
            }
        }
    }

    /// Map the shape through an affine transform. Primitives survive
    /// similarity transforms; anything else turns into a path.
    pub fn transformed(&self, t: &Transform2) -> Shape {
        match (self, t.classify()) {
            (
                Shape::Circle { center, radius },
                TransformKind::Similarity { scale, .. },
            ) => Shape::Circle {
                center: t.apply(*center),
                radius: radius * scale,
            },
            (
                Shape::Ellipse {
                    center,
                    rx,
                    ry,
                    rotation,
                },
                TransformKind::Similarity {
                    scale,
                    rotation: phi,
                    reflected,
                },
            ) => Shape::Ellipse {
                center: t.apply(*center),
                rx: rx * scale,
                ry: ry * scale,
                rotation: if reflected {
                    phi - rotation
                } else {
                    phi + rotation
                },
            },
            (
                Shape::Arc(seg),
                TransformKind::Similarity {
                    scale, reflected, ..
                },
            ) => Shape::Arc(seg.map_similarity(t, scale, reflected)),
            (shape, _) => Shape::Path(shape.to_path().transformed(t)),
        }
    }
}

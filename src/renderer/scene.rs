//! Scene generation as 2D draw commands
//!
//! Commands map one-to-one onto Canvas 2D calls but carry no platform
//! types, so the scene can be built and inspected anywhere.

use glam::DVec2;

use crate::sim::SessionState;

/// CSS colors for scene elements
pub mod colors {
    pub const CAT_STROKE: &str = "#00f";
    pub const CAT_FILL: &str = "#99f";
    pub const KEEP_AWAY: &str = "#eef";
    pub const LASER_STROKE: &str = "#f00";
    pub const LASER_FILL: &str = "#f99";
    pub const TRAIL: &str = "#dfd";
    pub const CENTER_MARK: &str = "rgba(0,0,0, 0.3)";
}

/// Dash pattern for the keep-away circle
pub const KEEP_AWAY_DASH: [f64; 2] = [4.0, 2.0];
/// Radius of trail markers
pub const TRAIL_MARKER_RADIUS: f64 = 10.0;
/// Half length of the center cross arms
pub const CENTER_MARK_SIZE: f64 = 5.0;

/// Stroke/fill settings for one path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: &'static str,
    pub fill: Option<&'static str>,
    pub dash: Option<[f64; 2]>,
}

impl Style {
    pub const fn stroke(color: &'static str) -> Self {
        Self {
            stroke: color,
            fill: None,
            dash: None,
        }
    }

    pub const fn filled(stroke: &'static str, fill: &'static str) -> Self {
        Self {
            stroke,
            fill: Some(fill),
            dash: None,
        }
    }

    pub const fn dashed(self, dash: [f64; 2]) -> Self {
        Self {
            dash: Some(dash),
            ..self
        }
    }
}

/// One drawing step
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole canvas
    Clear { width: f64, height: f64 },
    Circle {
        center: DVec2,
        radius: f64,
        style: Style,
    },
    /// Closed polygon
    Polygon { points: Vec<DVec2>, style: Style },
    /// Unconnected line segments stroked as one path
    Segments {
        segments: Vec<(DVec2, DVec2)>,
        style: Style,
    },
}

/// Build the full frame, back to front
pub fn build_scene(state: &SessionState) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(8 + state.trail.len());

    cmds.push(DrawCmd::Clear {
        width: state.bounds.width,
        height: state.bounds.height,
    });

    cmds.extend(trail_markers(state.trail.points()));
    cmds.extend(cat(state.cat, state.cat_radius));

    cmds.push(DrawCmd::Circle {
        center: state.cat,
        radius: state.keep_away_radius,
        style: Style::stroke(colors::KEEP_AWAY).dashed(KEEP_AWAY_DASH),
    });

    cmds.push(DrawCmd::Circle {
        center: state.rendered_laser(),
        radius: state.laser_radius,
        style: Style::filled(colors::LASER_STROKE, colors::LASER_FILL),
    });

    cmds.push(center_mark(state.bounds.center()));
    cmds
}

fn trail_markers(points: &[DVec2]) -> impl Iterator<Item = DrawCmd> + '_ {
    points.iter().map(|&center| DrawCmd::Circle {
        center,
        radius: TRAIL_MARKER_RADIUS,
        style: Style::stroke(colors::TRAIL),
    })
}

/// Body, nose dot and two ears
fn cat(pos: DVec2, radius: f64) -> [DrawCmd; 4] {
    let style = Style::filled(colors::CAT_STROKE, colors::CAT_FILL);
    let ear = |side: f64| DrawCmd::Polygon {
        points: vec![
            pos + DVec2::new(side * 0.8, -0.65) * radius,
            pos + DVec2::new(side * 0.95, -0.95) * radius,
            pos + DVec2::new(side * 0.65, -0.8) * radius,
        ],
        style,
    };

    [
        DrawCmd::Circle {
            center: pos,
            radius,
            style,
        },
        DrawCmd::Circle {
            center: pos,
            radius: 1.0,
            style,
        },
        ear(-1.0),
        ear(1.0),
    ]
}

fn center_mark(center: DVec2) -> DrawCmd {
    let h = DVec2::new(CENTER_MARK_SIZE, 0.0);
    let v = DVec2::new(0.0, CENTER_MARK_SIZE);
    DrawCmd::Segments {
        segments: vec![(center - h, center + h), (center - v, center + v)],
        style: Style::stroke(colors::CENTER_MARK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Bounds;
    use crate::settings::Settings;
    use crate::sim::tick;

    fn session(trail_length: usize) -> SessionState {
        let settings = Settings {
            trail_length,
            ..Default::default()
        };
        SessionState::new(Bounds::new(400.0, 300.0), &settings, 1)
    }

    #[test]
    fn test_scene_layers() {
        let state = session(0);
        let cmds = build_scene(&state);

        // clear, body, nose, 2 ears, keep-away, laser, center
        assert_eq!(cmds.len(), 8);
        assert_eq!(
            cmds[0],
            DrawCmd::Clear {
                width: 400.0,
                height: 300.0
            }
        );
        assert!(matches!(cmds[7], DrawCmd::Segments { .. }));
    }

    #[test]
    fn test_keep_away_circle_dashed() {
        let state = session(0);
        let cmds = build_scene(&state);
        let DrawCmd::Circle { radius, style, .. } = &cmds[5] else {
            panic!("expected keep-away circle, got {:?}", cmds[5]);
        };
        assert_eq!(*radius, state.keep_away_radius);
        assert_eq!(style.dash, Some(KEEP_AWAY_DASH));
    }

    #[test]
    fn test_laser_drawn_with_spin_offset() {
        let mut state = session(0);
        for _ in 0..6 {
            tick(&mut state);
        }
        let cmds = build_scene(&state);
        let DrawCmd::Circle { center, radius, .. } = &cmds[6] else {
            panic!("expected laser circle, got {:?}", cmds[6]);
        };
        assert_eq!(*center, state.laser + state.spin.offset);
        assert_ne!(*center, state.laser);
        assert_eq!(*radius, 5.0);
    }

    #[test]
    fn test_trail_drawn_under_cat() {
        let mut state = session(4);
        state.on_pointer_move(DVec2::new(150.0, 150.0));
        let cmds = build_scene(&state);
        assert_eq!(cmds.len(), 9);
        assert_eq!(
            cmds[1],
            DrawCmd::Circle {
                center: state.laser,
                radius: TRAIL_MARKER_RADIUS,
                style: Style::stroke(colors::TRAIL),
            }
        );
    }

    #[test]
    fn test_ears_mirror() {
        let [_, _, DrawCmd::Polygon { points: left, .. }, DrawCmd::Polygon { points: right, .. }] =
            cat(DVec2::new(100.0, 100.0), 10.0)
        else {
            panic!("cat shape changed");
        };
        assert!(left[0].distance(DVec2::new(92.0, 93.5)) < 1e-9);
        assert!(right[0].distance(DVec2::new(108.0, 93.5)) < 1e-9);
    }
}

//! Shape generation for the flat-colored track scene

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::GameState;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let l = center.x - half.x;
    let r = center.x + half.x;
    let t = center.y - half.y;
    let b = center.y + half.y;

    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}

/// Generate vertices for a vertical line strip of the given width
pub fn vline(x: f32, y0: f32, y1: f32, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    rect(
        Vec2::new(x, (y0 + y1) / 2.0),
        Vec2::new(width, y1 - y0),
        color,
    )
}

/// Generate vertices for a two-tone car: body plus a windshield band
pub fn car(center: Vec2, body_color: [f32; 4]) -> Vec<Vertex> {
    let size = Vec2::new(CAR_WIDTH, CAR_HEIGHT);
    let mut vertices = rect(center, size, body_color);

    let glass_center = Vec2::new(center.x, center.y - CAR_HEIGHT * 0.18);
    let glass_size = Vec2::new(CAR_WIDTH * 0.7, CAR_HEIGHT * 0.2);
    vertices.extend(rect(glass_center, glass_size, colors::CAR_GLASS));

    vertices
}

/// Assemble the full frame: road band, lane markings, both cars
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(64);

    // Asphalt
    vertices.extend(rect(
        Vec2::new(ROAD_CENTER_X, TRACK_HEIGHT / 2.0),
        Vec2::new(ROAD_WIDTH, TRACK_HEIGHT),
        colors::ROAD,
    ));

    // Edge lines, inset a little from the road border
    let line_width = 5.0;
    let left_edge = ROAD_CENTER_X - ROAD_WIDTH / 2.0 + 10.0;
    let right_edge = ROAD_CENTER_X + ROAD_WIDTH / 2.0 - 10.0;
    vertices.extend(vline(left_edge, 0.0, TRACK_HEIGHT, line_width, colors::LANE_LINE));
    vertices.extend(vline(right_edge, 0.0, TRACK_HEIGHT, line_width, colors::LANE_LINE));

    // Center divider, double width
    vertices.extend(vline(
        ROAD_CENTER_X,
        0.0,
        TRACK_HEIGHT,
        line_width * 2.0,
        colors::LANE_LINE,
    ));

    vertices.extend(car(state.rival.pos(), colors::RIVAL_BODY));
    vertices.extend(car(state.player.pos(), colors::PLAYER_BODY));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Lane;

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0), colors::ROAD);
        assert_eq!(v.len(), 6);
        // Corners span the requested extents
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().all(|&x| (8.0..=12.0).contains(&x)));
    }

    #[test]
    fn test_scene_tracks_car_positions() {
        let state = GameState::new(42);
        let vertices = scene(&state);
        assert!(!vertices.is_empty());

        // The player body quad sits at its lane center
        let lane_x = Lane::Left.x();
        assert!(
            vertices
                .iter()
                .any(|v| (v.position[0] - (lane_x - CAR_WIDTH / 2.0)).abs() < 0.001)
        );
    }
}

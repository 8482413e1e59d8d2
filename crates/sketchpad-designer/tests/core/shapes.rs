use std::collections::HashSet;
use std::f64::consts::PI;

use sketchpad_core::{DashStyle, FigureProperties, Point, Rgba};
use sketchpad_designer::{
    Circle, CircleArc, Drawable, Grouping, Line, Polygon, Reflection, RegularPolygon, Shape,
    ShapeId, ShapeKind,
};

fn props() -> FigureProperties {
    FigureProperties::solid(Rgba::BLUE)
}

#[test]
fn test_streams_are_deterministic_and_need_a_fresh_call() {
    let circle = Circle::new(Point::new(200, 200), Point::new(240, 230), props());
    let mut first = circle.points();
    let a: Vec<_> = first.by_ref().collect();
    // the first stream is spent
    assert_eq!(first.next(), None);
    let b: Vec<_> = circle.points().collect();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_polygon_closure_includes_edge_back_to_origin() {
    let poly = Polygon::new(
        vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
        props(),
    );
    let pixels: HashSet<Point> = poly.points().map(|p| p.point).collect();
    for i in 1..10 {
        assert!(pixels.contains(&Point::new(i, i)));
    }
}

#[test]
fn test_regular_polygon_and_circle_kinds() {
    let hex: Shape = RegularPolygon::new(Point::new(50, 50), Point::new(70, 50), 6, props()).into();
    let circle: Shape = Circle::new(Point::new(50, 50), Point::new(70, 50), props()).into();
    assert_eq!(hex.kind(), ShapeKind::RegularPolygon);
    assert_eq!(circle.kind(), ShapeKind::Circle);
    assert_eq!(hex.kind().to_string(), "regular polygon");
}

#[test]
fn test_half_circle_arc_stays_on_one_side() {
    let arc = CircleArc::new(Point::new(100, 100), Point::new(60, 100), PI, props());
    // a positive sweep from the left passes over the top
    assert!(arc.points().all(|p| p.point.y <= 100));
    assert!(arc.points().any(|p| p.point.y < 70));
}

#[test]
fn test_negative_sweep_turns_towards_negative_y() {
    let center = Point::new(100, 100);
    let clockwise = CircleArc::new(center, Point::new(140, 100), -PI / 2.0, props());
    // radius 40 gives 16 sides; a quarter turn takes 4 of them
    assert_eq!(clockwise.segments(), 4);
    let vertices = clockwise.vertices();
    assert_eq!(vertices.len(), 5);
    assert_eq!(vertices[0], Point::new(140, 100));
    assert_eq!(vertices[4], Point::new(100, 60));
    assert!(clockwise
        .points()
        .all(|p| p.point.x >= 100 && p.point.y <= 100));

    let counter = CircleArc::new(center, Point::new(140, 100), PI / 2.0, props());
    assert_eq!(counter.segments(), 4);
    assert!(counter.points().all(|p| p.point.y >= 100));
    assert_eq!(counter.vertices()[4], Point::new(100, 140));
}

#[test]
fn test_style_is_captured_per_shape() {
    let dotted = FigureProperties::new(Rgba::GREEN, DashStyle::Dotted, true);
    let line = Line::new(Point::new(0, 0), Point::new(20, 0), dotted);
    assert!(line.points().all(|p| p.color == Rgba::GREEN));
    // thick doubles every visible step
    assert_eq!(line.points().count(), 20);
}

#[test]
fn test_group_duplicate_is_deep() {
    let group: Shape = Grouping::new(vec![
        Line::new(Point::new(0, 0), Point::new(9, 0), props()).into(),
        Circle::new(Point::new(30, 30), Point::new(40, 30), props()).into(),
    ])
    .into();
    let mut copy = group.duplicate(ShapeId(12));
    assert_eq!(copy.id(), ShapeId(12));
    copy.translate(Point::new(3, 3));
    let original: Vec<_> = group.points().collect();
    let moved: Vec<_> = copy.points().collect();
    assert_eq!(original.len(), moved.len());
    assert_ne!(original, moved);
}

#[test]
fn test_reflection_of_line() {
    let mut line = Line::new(Point::new(0, 0), Point::new(10, 0), props());
    line.reflect(Reflection::Vertical(5));
    assert_eq!(line.start, Point::new(10, 0));
    assert_eq!(line.end, Point::new(0, 0));
    assert_eq!(line.length(), 10.0);
}

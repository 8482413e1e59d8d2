use std::collections::HashSet;

use sketchpad_core::{FigureProperties, Point, Rgba};
use sketchpad_designer::{Canvas, CanvasOptions, Circle, Drawable, Line, Polygon, Shape, ShapeId};

fn canvas() -> Canvas {
    Canvas::headless(CanvasOptions::default())
}

fn pixels(shape: &Shape) -> HashSet<Point> {
    shape.points().map(|p| p.point).collect()
}

#[test]
fn test_occlusion_and_uncovering() {
    let mut canvas = canvas();
    let a = canvas.register(
        Line::new(Point::new(0, 40), Point::new(80, 40), FigureProperties::solid(Rgba::RED)).into(),
    );
    let b = canvas.register(
        Line::new(Point::new(40, 0), Point::new(40, 80), FigureProperties::solid(Rgba::GREEN))
            .into(),
    );
    let crossing = Point::new(40, 40);
    assert_eq!(canvas.matrix().top_owner(crossing), Some(b));
    canvas.delete(b);
    assert_eq!(canvas.matrix().top_owner(crossing), Some(a));
    assert_eq!(canvas.matrix().top_colored_point(crossing).color, Rgba::RED);
}

#[test]
fn test_register_then_delete_restores_index() {
    let mut canvas = canvas();
    canvas.register(
        Circle::new(Point::new(300, 300), Point::new(340, 300), FigureProperties::default()).into(),
    );
    let snapshot = canvas.matrix().clone();
    let id = canvas.register(
        Polygon::new(
            vec![Point::new(280, 280), Point::new(360, 290), Point::new(320, 350)],
            FigureProperties::solid(Rgba::BLUE),
        )
        .into(),
    );
    canvas.delete(id);
    assert_eq!(canvas.matrix(), &snapshot);
}

#[test]
fn test_polygon_closing_edge_is_indexed() {
    let mut canvas = canvas();
    let id = canvas.register(
        Polygon::new(
            vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
            FigureProperties::default(),
        )
        .into(),
    );
    for i in 0..10 {
        assert_eq!(canvas.matrix().top_owner(Point::new(i, i)), Some(id));
    }
}

#[test]
fn test_mirror_leaves_original_untouched() {
    let mut canvas = canvas();
    let original = Line::new(Point::new(0, 0), Point::new(10, 0), FigureProperties::default());
    let id = canvas.register(original.clone().into());
    let copy = canvas
        .mirror(id, Point::new(5, 0), Point::new(5, 10))
        .unwrap();
    assert_ne!(copy, id);

    match (canvas.shape(id), canvas.shape(copy)) {
        (Some(Shape::Line(before)), Some(Shape::Line(mirrored))) => {
            assert_eq!(before.start, original.start);
            assert_eq!(before.end, original.end);
            assert_eq!(mirrored.length(), before.length());
            assert_eq!(mirrored.start, Point::new(10, 0));
            assert_eq!(mirrored.end, Point::new(0, 0));
        }
        other => panic!("unexpected shapes {other:?}"),
    }
}

#[test]
fn test_moving_a_circle_vacates_old_pixels() {
    let mut canvas = canvas();
    let id = canvas.register(
        Circle::new(Point::new(100, 100), Point::new(120, 100), FigureProperties::default()).into(),
    );
    let before = pixels(canvas.shape(id).unwrap());
    assert!(canvas.translate(id, Point::new(5, 5)));

    let moved = canvas.shape(id).unwrap();
    match moved {
        Shape::Circle(circle) => {
            assert_eq!(circle.center, Point::new(105, 105));
            assert_eq!(circle.start, Point::new(125, 105));
        }
        other => panic!("unexpected {other:?}"),
    }
    let after = pixels(moved);
    for p in before.difference(&after) {
        assert_eq!(canvas.matrix().top_owner(*p), None, "{p} still owned");
    }
    for p in &after {
        assert_eq!(canvas.matrix().top_owner(*p), Some(id));
    }
}

#[test]
fn test_line_partly_off_canvas_is_clipped() {
    let mut canvas = canvas();
    let id = canvas.register(
        Line::new(Point::new(-5, 300), Point::new(30, 300), FigureProperties::default()).into(),
    );
    let matrix = canvas.matrix();
    // only x in 0..30 is inside
    assert_eq!(matrix.occupancy(id), 30);
    assert_eq!(matrix.top_owner(Point::new(0, 300)), Some(id));
    assert!(!matrix.in_bounds(Point::new(-5, 300)));
}

#[test]
fn test_shapes_iterate_in_creation_order() {
    let mut canvas = canvas();
    let ids: Vec<ShapeId> = (0..4)
        .map(|i| {
            canvas.register(
                Line::new(Point::new(0, i * 5), Point::new(20, i * 5), FigureProperties::default())
                    .into(),
            )
        })
        .collect();
    canvas.translate(ids[0], Point::new(1, 1));
    let listed: Vec<ShapeId> = canvas.shapes().map(|s| s.id()).collect();
    assert_eq!(listed, ids);
}

use proptest::prelude::*;
use sketchpad_core::{DashStyle, FigureProperties, Point, Rgba};
use sketchpad_designer::{Canvas, CanvasOptions, Drawable, Line, Polygon, Shape};

fn point() -> impl Strategy<Value = Point> {
    (-20i32..220, -20i32..170).prop_map(|(x, y)| Point::new(x, y))
}

fn style() -> impl Strategy<Value = FigureProperties> {
    (
        prop_oneof![
            Just(DashStyle::Solid),
            Just(DashStyle::Dotted),
            Just(DashStyle::Dashed)
        ],
        any::<bool>(),
    )
        .prop_map(|(dash, thick)| FigureProperties::new(Rgba::WHITE, dash, thick))
}

fn small_canvas() -> Canvas {
    Canvas::headless(CanvasOptions {
        width: 200,
        height: 150,
        ..CanvasOptions::default()
    })
}

proptest! {
    #[test]
    fn line_stream_is_deterministic(a in point(), b in point(), props in style()) {
        let line = Line::new(a, b, props);
        let first: Vec<_> = line.points().collect();
        let second: Vec<_> = line.points().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn line_length_bounds_point_count(a in point(), b in point()) {
        let line = Line::new(a, b, FigureProperties::default());
        let major = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize;
        prop_assert_eq!(line.points().count(), major);
    }

    #[test]
    fn register_then_delete_restores_matrix(
        below in proptest::collection::vec(point(), 2..6),
        above in proptest::collection::vec(point(), 2..6),
        props in style(),
    ) {
        let mut canvas = small_canvas();
        canvas.register(Polygon::new(below, FigureProperties::default()).into());
        let snapshot = canvas.matrix().clone();

        let id = canvas.register(Shape::from(Polygon::new(above, props)));
        canvas.delete(id);
        prop_assert_eq!(canvas.matrix(), &snapshot);
    }

    #[test]
    fn registered_points_stay_on_canvas(a in point(), b in point()) {
        let mut canvas = small_canvas();
        let id = canvas.register(Line::new(a, b, FigureProperties::default()).into());
        let expected = canvas
            .shape(id)
            .map(|s| s.points().filter(|p| canvas.matrix().in_bounds(p.point)).count())
            .unwrap_or_default();
        prop_assert_eq!(canvas.matrix().occupancy(id), expected);
    }
}

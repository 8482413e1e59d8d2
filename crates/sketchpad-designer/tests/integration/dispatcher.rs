use std::collections::HashSet;

use sketchpad_core::input::play;
use sketchpad_core::{DashStyle, InputEvent, KeyCode, Point, Rgba, StyleContext};
use sketchpad_designer::{Canvas, CanvasOptions, Dispatcher, Drawable, InputStreams, Shape};
use tokio::sync::{mpsc, oneshot};

fn click(x: i32, y: i32) -> InputEvent {
    InputEvent::Click(Point::new(x, y))
}

fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyCode::from(c))
}

fn enter() -> InputEvent {
    InputEvent::Key(KeyCode::ENTER)
}

async fn replay_with(events: Vec<InputEvent>, max_vertices: usize) -> Canvas {
    let (click_tx, click_rx) = mpsc::channel(1);
    let (key_tx, key_rx) = mpsc::channel(1);
    let feeder = tokio::spawn(play(events, click_tx, key_tx));
    let canvas = Dispatcher::new(
        Canvas::headless(CanvasOptions::default()),
        StyleContext::default(),
        InputStreams::new(click_rx, key_rx),
    )
    .with_max_polygon_vertices(max_vertices)
    .run()
    .await;
    feeder.await.unwrap();
    canvas
}

async fn replay(events: Vec<InputEvent>) -> Canvas {
    replay_with(events, 50).await
}

fn only_shape(canvas: &Canvas) -> &Shape {
    assert_eq!(canvas.len(), 1, "expected exactly one shape");
    canvas.shapes().next().unwrap()
}

#[tokio::test]
async fn test_line_from_two_clicks() {
    let canvas = replay(vec![key('l'), click(10, 10), click(50, 10)]).await;
    match only_shape(&canvas) {
        Shape::Line(line) => {
            assert_eq!(line.start, Point::new(10, 10));
            assert_eq!(line.end, Point::new(50, 10));
            assert_eq!(line.props.color, Rgba::WHITE);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_far_clicks_are_clamped_before_drawing() {
    use sketchpad_core::constants::COORDINATE_LIMIT;

    let canvas = replay(vec![key('l'), click(-2_000_000_000, 0), click(2_000_000_000, 0)]).await;
    let shape = only_shape(&canvas);
    match shape {
        Shape::Line(line) => {
            assert_eq!(line.start, Point::new(-COORDINATE_LIMIT, 0));
            assert_eq!(line.end, Point::new(COORDINATE_LIMIT, 0));
        }
        other => panic!("unexpected {other:?}"),
    }
    // only the on-canvas part of row 0 is indexed
    assert_eq!(canvas.matrix().occupancy(shape.id()), 800);
}

#[tokio::test]
async fn test_shapes_without_pixels_are_not_stored() {
    let canvas = replay(vec![
        key('l'),
        click(10, 10),
        click(10, 10),
        key('o'),
        click(5, 5),
        click(5, 5),
        key('l'),
        click(-50, -50),
        click(-10, -10),
        key('p'),
        click(20, 20),
        click(20, 20),
        enter(),
        key('l'),
        click(0, 0),
        click(30, 0),
    ])
    .await;
    match only_shape(&canvas) {
        Shape::Line(line) => assert_eq!(line.end, Point::new(30, 0)),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_key_cancels_and_is_consumed() {
    // 'o' cancels the line and does not start a circle
    let canvas = replay(vec![
        key('l'),
        click(10, 10),
        key('o'),
        click(100, 100),
        click(120, 100),
    ])
    .await;
    assert!(canvas.is_empty());
}

#[tokio::test]
async fn test_stray_clicks_and_unknown_keys_are_ignored() {
    let canvas = replay(vec![click(5, 5), key('q'), click(6, 6), key('l'), click(1, 1), click(9, 1)]).await;
    assert_eq!(canvas.len(), 1);
}

#[tokio::test]
async fn test_polygon_commits_edges_and_closes() {
    let canvas = replay(vec![
        key('p'),
        click(10, 10),
        click(60, 10),
        click(60, 60),
        enter(),
    ])
    .await;
    let shape = only_shape(&canvas);
    match shape {
        Shape::Polygon(poly) => assert_eq!(poly.vertices.len(), 3),
        other => panic!("unexpected {other:?}"),
    }
    let expected = shape.points().count();
    assert_eq!(canvas.matrix().occupancy(shape.id()), expected);
    // closing edge back to the first vertex
    assert_eq!(canvas.matrix().top_owner(Point::new(30, 30)), Some(shape.id()));
}

#[tokio::test]
async fn test_polygon_with_one_vertex_is_dropped() {
    let canvas = replay(vec![key('p'), click(10, 10), enter()]).await;
    assert!(canvas.is_empty());
}

#[tokio::test]
async fn test_polygon_stops_at_vertex_limit() {
    let canvas = replay_with(
        vec![
            key('p'),
            click(10, 10),
            click(60, 10),
            click(60, 60),
            key('l'),
            click(100, 100),
            click(150, 100),
        ],
        3,
    )
    .await;
    let kinds: Vec<String> = canvas.shapes().map(|s| s.kind().to_string()).collect();
    assert_eq!(kinds, vec!["polygon", "line"]);
}

#[tokio::test]
async fn test_regular_polygon_needs_three_sides() {
    let canvas = replay(vec![
        key('-'),
        key('-'),
        key('-'),
        key('r'),
        click(100, 100),
        click(130, 100),
        key('+'),
        key('r'),
        click(100, 100),
        click(130, 100),
    ])
    .await;
    match only_shape(&canvas) {
        Shape::RegularPolygon(poly) => assert_eq!(poly.sides, 3),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_arc_sweep_from_three_clicks() {
    let canvas = replay(vec![key('a'), click(100, 100), click(150, 100), click(100, 180)]).await;
    match only_shape(&canvas) {
        Shape::CircleArc(arc) => {
            assert!((arc.sweep - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
            assert_eq!(arc.center, Point::new(100, 100));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_move_circle() {
    let canvas = replay(vec![
        key('o'),
        click(100, 100),
        click(120, 100),
        key('m'),
        click(300, 300), // nothing here, keep waiting
        click(120, 100),
        click(125, 105),
    ])
    .await;
    let shape = only_shape(&canvas);
    match shape {
        Shape::Circle(circle) => {
            assert_eq!(circle.center, Point::new(105, 105));
            assert_eq!(circle.start, Point::new(125, 105));
        }
        other => panic!("unexpected {other:?}"),
    }
    let now: HashSet<Point> = shape.points().map(|p| p.point).collect();
    assert!(!now.contains(&Point::new(100, 120)));
    assert_eq!(canvas.matrix().top_owner(Point::new(100, 120)), None);
}

#[tokio::test]
async fn test_rotate_quarter_turn() {
    let canvas = replay(vec![
        key('l'),
        click(100, 100),
        click(140, 100),
        key('g'),
        click(120, 100),
        click(100, 100),
        click(140, 100),
        click(100, 140),
    ])
    .await;
    match only_shape(&canvas) {
        Shape::Line(line) => {
            assert_eq!(line.start, Point::new(100, 100));
            assert_eq!(line.end, Point::new(100, 140));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_mirror_adds_a_copy() {
    let canvas = replay(vec![
        key('l'),
        click(0, 0),
        click(10, 0),
        key('z'),
        click(3, 0),
        click(5, 0),
        click(5, 10),
    ])
    .await;
    assert_eq!(canvas.len(), 2);
    let lines: Vec<_> = canvas
        .shapes()
        .filter_map(|s| match s {
            Shape::Line(l) => Some((l.start, l.end)),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            (Point::new(0, 0), Point::new(10, 0)),
            (Point::new(10, 0), Point::new(0, 0))
        ]
    );
}

#[tokio::test]
async fn test_delete_clears_the_index() {
    let canvas = replay(vec![
        key('o'),
        click(200, 200),
        click(230, 200),
        key('d'),
        click(231, 201),
    ])
    .await;
    assert!(canvas.is_empty());
    assert_eq!(canvas.matrix().nearest_shape(Point::new(230, 200)), None);
}

#[tokio::test]
async fn test_group_then_ungroup() {
    let grouped = vec![
        key('l'),
        click(10, 10),
        click(60, 10),
        key('l'),
        click(10, 40),
        click(60, 40),
        key('w'),
        click(20, 10),
        click(20, 40),
        click(30, 10),
        enter(),
    ];
    let canvas = replay(grouped.clone()).await;
    match only_shape(&canvas) {
        Shape::Grouping(group) => assert_eq!(group.len(), 2),
        other => panic!("unexpected {other:?}"),
    }

    let mut events = grouped;
    events.extend([key('y'), click(20, 40)]);
    let canvas = replay(events).await;
    assert_eq!(canvas.len(), 2);
    assert!(canvas.shapes().all(|s| matches!(s, Shape::Line(_))));
}

#[tokio::test]
async fn test_ungroup_ignores_plain_shapes() {
    let canvas = replay(vec![key('l'), click(10, 10), click(60, 10), key('y'), click(20, 10)]).await;
    assert!(matches!(only_shape(&canvas), Shape::Line(_)));
}

#[tokio::test]
async fn test_style_commands_apply_to_new_shapes() {
    let canvas = replay(vec![
        key('l'),
        click(0, 0),
        click(40, 0),
        key('c'),
        click(7, 7), // ignored while choosing
        key('g'),
        key('t'),
        key('b'),
        key('l'),
        click(0, 20),
        click(40, 20),
        key('c'),
        key('x'),
        key('l'),
        click(0, 40),
        click(40, 40),
    ])
    .await;
    let props: Vec<_> = canvas
        .shapes()
        .filter_map(|s| match s {
            Shape::Line(l) => Some(l.props),
            _ => None,
        })
        .collect();
    assert_eq!(props.len(), 3);
    assert_eq!(props[0].color, Rgba::WHITE);
    assert_eq!(props[1].color, Rgba::GREEN);
    assert_eq!(props[1].dash, DashStyle::Dotted);
    assert!(props[1].thick);
    assert_eq!(props[2], props[1]);
}

#[tokio::test]
async fn test_run_until_quit() {
    let (click_tx, click_rx) = mpsc::channel::<Point>(1);
    let (key_tx, key_rx) = mpsc::channel::<KeyCode>(1);
    let (quit_tx, quit_rx) = oneshot::channel::<()>();

    let dispatcher = Dispatcher::new(
        Canvas::headless(CanvasOptions::default()),
        StyleContext::default(),
        InputStreams::new(click_rx, key_rx),
    );
    let task = tokio::spawn(dispatcher.run_until(async {
        let _ = quit_rx.await;
    }));

    key_tx.send(KeyCode::from('l')).await.unwrap();
    click_tx.send(Point::new(1, 1)).await.unwrap();
    quit_tx.send(()).unwrap();

    let canvas = task.await.unwrap();
    assert!(canvas.is_empty());
    // senders are still alive; the quit signal alone ended the run
    drop((click_tx, key_tx));
}

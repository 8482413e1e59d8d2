//! Command dispatcher.
//!
//! Owns the canvas, the current drawing style and both input streams. A key
//! press picks a command; the command then reads clicks (and sometimes
//! keys) until it has what it needs. Any key pressed while a command waits
//! for a click cancels it, and that key is consumed.

mod create;
mod group;
mod style;
mod transform;

use std::fmt;
use std::future::Future;

use sketchpad_core::constants::MAX_POLYGON_VERTICES;
use sketchpad_core::{KeyCode, Point, StyleContext};
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::canvas::Canvas;
use crate::model::ShapeId;

/// One item read from either input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click(Point),
    Key(KeyCode),
}

/// The click and key receivers, read as one stream.
///
/// Keys win when both are ready. Invalid key codes are skipped and clicks
/// are clamped to `COORDINATE_LIMIT`. Returns `None` once both streams are
/// closed.
#[derive(Debug)]
pub struct InputStreams {
    clicks: mpsc::Receiver<Point>,
    keys: mpsc::Receiver<KeyCode>,
    clicks_open: bool,
    keys_open: bool,
}

impl InputStreams {
    pub fn new(clicks: mpsc::Receiver<Point>, keys: mpsc::Receiver<KeyCode>) -> Self {
        Self {
            clicks,
            keys,
            clicks_open: true,
            keys_open: true,
        }
    }

    pub async fn next(&mut self) -> Option<Input> {
        loop {
            if !self.clicks_open && !self.keys_open {
                return None;
            }
            tokio::select! {
                biased;
                key = self.keys.recv(), if self.keys_open => match key {
                    Some(key) if key.is_valid() => return Some(Input::Key(key)),
                    Some(key) => trace!("skipping invalid key code {}", key),
                    None => self.keys_open = false,
                },
                click = self.clicks.recv(), if self.clicks_open => match click {
                    Some(point) => return Some(Input::Click(point.clamped())),
                    None => self.clicks_open = false,
                },
            }
        }
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Line,
    Polygon,
    RegularPolygon,
    Circle,
    Arc,
    Move,
    Rotate,
    Mirror,
    Delete,
    Group,
    Ungroup,
    SetColor,
    CycleDash,
    ToggleThick,
    IncrementSides,
    DecrementSides,
}

impl Command {
    pub fn from_key(key: KeyCode) -> Option<Command> {
        let command = match key.as_char()? {
            'l' => Command::Line,
            'p' => Command::Polygon,
            'r' => Command::RegularPolygon,
            'o' => Command::Circle,
            'a' => Command::Arc,
            'm' => Command::Move,
            'g' => Command::Rotate,
            'z' => Command::Mirror,
            'd' => Command::Delete,
            'w' => Command::Group,
            'y' => Command::Ungroup,
            'c' => Command::SetColor,
            't' => Command::CycleDash,
            'b' => Command::ToggleThick,
            '+' => Command::IncrementSides,
            '-' => Command::DecrementSides,
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Line => "line",
            Command::Polygon => "polygon",
            Command::RegularPolygon => "regular polygon",
            Command::Circle => "circle",
            Command::Arc => "arc",
            Command::Move => "move",
            Command::Rotate => "rotate",
            Command::Mirror => "mirror",
            Command::Delete => "delete",
            Command::Group => "group",
            Command::Ungroup => "ungroup",
            Command::SetColor => "set color",
            Command::CycleDash => "cycle dash",
            Command::ToggleThick => "toggle thickness",
            Command::IncrementSides => "more sides",
            Command::DecrementSides => "fewer sides",
        };
        f.write_str(name)
    }
}

/// Drives the canvas from the input streams.
#[derive(Debug)]
pub struct Dispatcher {
    canvas: Canvas,
    style: StyleContext,
    input: InputStreams,
    max_polygon_vertices: usize,
}

impl Dispatcher {
    pub fn new(canvas: Canvas, style: StyleContext, input: InputStreams) -> Self {
        Self {
            canvas,
            style,
            input,
            max_polygon_vertices: MAX_POLYGON_VERTICES,
        }
    }

    /// Caps the number of clicks one polygon accepts.
    pub fn with_max_polygon_vertices(mut self, max: usize) -> Self {
        self.max_polygon_vertices = max;
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    /// Runs until both input streams close, then hands the canvas back.
    pub async fn run(self) -> Canvas {
        self.run_until(std::future::pending()).await
    }

    /// Like [`Dispatcher::run`], but also stops when `quit` resolves. A
    /// command in progress is abandoned.
    pub async fn run_until<F>(mut self, quit: F) -> Canvas
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = quit => info!("quit requested"),
            _ = self.serve() => debug!("input streams closed"),
        }
        self.canvas
    }

    async fn serve(&mut self) {
        while let Some(input) = self.input.next().await {
            match input {
                Input::Key(key) => self.dispatch(key).await,
                Input::Click(point) => debug!("ignoring stray click at {}", point),
            }
        }
    }

    /// Runs the command bound to `key` to completion or cancellation.
    pub async fn dispatch(&mut self, key: KeyCode) {
        let Some(command) = Command::from_key(key) else {
            debug!("no command bound to {}", key);
            return;
        };
        debug!("dispatching {} for {}", command, key);
        match command {
            Command::Line => self.draw_line().await,
            Command::Polygon => self.draw_polygon().await,
            Command::RegularPolygon => self.draw_regular_polygon().await,
            Command::Circle => self.draw_circle().await,
            Command::Arc => self.draw_arc().await,
            Command::Move => self.move_shape().await,
            Command::Rotate => self.rotate_shape().await,
            Command::Mirror => self.mirror_shape().await,
            Command::Delete => self.delete_shape().await,
            Command::Group => self.group_shapes().await,
            Command::Ungroup => self.ungroup_shape().await,
            Command::SetColor => self.set_color().await,
            Command::CycleDash => self.cycle_dash(),
            Command::ToggleThick => self.toggle_thick(),
            Command::IncrementSides => self.increment_sides(),
            Command::DecrementSides => self.decrement_sides(),
        }
    }

    /// Next click. A key press cancels the running command.
    async fn click(&mut self) -> Option<Point> {
        match self.input.next().await? {
            Input::Click(point) => Some(point),
            Input::Key(key) => {
                debug!("command cancelled by {}", key);
                None
            }
        }
    }

    /// Clicks until one lands near a shape. Returns the shape and the pixel
    /// it was found at.
    async fn pick(&mut self) -> Option<(ShapeId, Point)> {
        loop {
            let point = self.click().await?;
            match self.canvas.pick(point) {
                Some(hit) => return Some(hit),
                None => debug!("nothing near {}", point),
            }
        }
    }
}

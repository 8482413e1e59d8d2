//! Input scripts.
//!
//! A script records a drawing session as text, one directive per line:
//!
//! ```text
//! # a red line
//! key c
//! key r
//! key l
//! click 10 10
//! mouse 50 10 1
//! mouse 50 10 0
//! ```
//!
//! `click X Y` is a click; `mouse X Y BUTTONS` is a raw mouse sample that
//! only becomes a click on a left-button press; `key K` is a key press,
//! where `K` is one character or one of `plus`, `minus`, `space`, `enter`
//! and `escape`. Blank lines and `#` comments are skipped. Coordinates are
//! clamped to `COORDINATE_LIMIT`.

use std::path::Path;

use sketchpad_core::{ClickDetector, InputError, InputEvent, KeyCode, MouseSample, Point};

/// Parses a whole script.
pub fn parse_script(source: &str) -> Result<Vec<InputEvent>, InputError> {
    let mut detector = ClickDetector::new();
    let mut events = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let mut words = line.split_whitespace();
        let Some(directive) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        match directive {
            "click" => {
                let [x, y] = numbers::<2>(&args, line_number)?;
                events.push(InputEvent::Click(Point::new(x, y).clamped()));
            }
            "mouse" => {
                let [x, y, buttons] = numbers::<3>(&args, line_number)?;
                let buttons = u32::try_from(buttons).map_err(|_| InputError::InvalidDirective {
                    line_number,
                    reason: format!("button mask {} is negative", buttons),
                })?;
                if let Some(point) = detector.sample(MouseSample::new(Point::new(x, y).clamped(), buttons)) {
                    events.push(InputEvent::Click(point));
                }
            }
            "key" => {
                let [name] = args[..] else {
                    return Err(InputError::InvalidDirective {
                        line_number,
                        reason: format!("key takes one argument, got {}", args.len()),
                    });
                };
                events.push(InputEvent::Key(key_code(name, line_number)?));
            }
            other => {
                return Err(InputError::UnknownDirective {
                    line_number,
                    directive: other.to_string(),
                })
            }
        }
    }

    Ok(events)
}

/// Reads and parses the script at `path`.
pub fn load_script(path: &Path) -> sketchpad_core::Result<Vec<InputEvent>> {
    let source = std::fs::read_to_string(path)?;
    let events = parse_script(&source)?;
    tracing::debug!("{} events in {}", events.len(), path.display());
    Ok(events)
}

fn key_code(name: &str, line_number: usize) -> Result<KeyCode, InputError> {
    let code = match name {
        "plus" => KeyCode::from('+'),
        "minus" => KeyCode::from('-'),
        "space" => KeyCode::SPACE,
        "enter" => KeyCode::ENTER,
        "escape" => KeyCode::ESCAPE,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::from(c),
                _ => {
                    return Err(InputError::InvalidKey {
                        line_number,
                        name: name.to_string(),
                    })
                }
            }
        }
    };
    Ok(code)
}

fn numbers<const N: usize>(args: &[&str], line_number: usize) -> Result<[i32; N], InputError> {
    if args.len() != N {
        return Err(InputError::InvalidDirective {
            line_number,
            reason: format!("expected {} numbers, got {}", N, args.len()),
        });
    }
    let mut out = [0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|_| InputError::InvalidDirective {
            line_number,
            reason: format!("'{}' is not an integer", arg),
        })?;
    }
    Ok(out)
}

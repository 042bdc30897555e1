//! Drawing scripts: a canvas size plus a list of operations.

use crate::render::render;
use kurbo::Point;
use rasterlab_core::{
    Canvas, CanvasConfig, ClipAlgorithm, LineAlgorithm, RasterError, ShapeContext, ShapeId,
    Transformation, Window,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("No shape named '{0}'")]
    UnknownShape(String),
    #[error("Shape named '{0}' already exists")]
    DuplicateName(String),
}

/// A drawing script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub canvas: CanvasConfig,
    pub operations: Vec<Operation>,
    /// Where to write the final canvas as JSON.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// One step of a script. Shapes are referred to by the name they were drawn under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    Line {
        name: String,
        start: Point,
        end: Point,
        #[serde(default)]
        algorithm: LineAlgorithm,
    },
    Circle {
        name: String,
        center: Point,
        radius: u32,
    },
    Translate {
        name: String,
        dx: f64,
        dy: f64,
    },
    Rotate {
        name: String,
        degrees: f64,
        #[serde(default)]
        pivot: Option<Point>,
    },
    Scale {
        name: String,
        sx: f64,
        sy: f64,
        #[serde(default)]
        pivot: Option<Point>,
    },
    Reflect {
        name: String,
        #[serde(default)]
        x: bool,
        #[serde(default)]
        y: bool,
    },
    /// Clip the named line, or every line when no name is given.
    Clip {
        lower: Point,
        upper: Point,
        #[serde(default)]
        algorithm: ClipAlgorithm,
        #[serde(default)]
        name: Option<String>,
    },
    ResetVisibility,
    Remove {
        name: String,
    },
}

fn lookup(canvas: &Canvas, name: &str) -> Result<ShapeId, AppError> {
    canvas
        .find_by_name(name)
        .ok_or_else(|| AppError::UnknownShape(name.to_string()))
}

/// Names pick shapes in later operations, so each may be drawn once.
fn fresh_context(canvas: &Canvas, name: &str) -> Result<ShapeContext, AppError> {
    if canvas.find_by_name(name).is_some() {
        return Err(AppError::DuplicateName(name.to_string()));
    }
    Ok(ShapeContext::new(name))
}

fn transform(canvas: &mut Canvas, name: &str, transformation: Transformation) -> Result<(), AppError> {
    let id = lookup(canvas, name)?;
    canvas.transform(id, &transformation)?;
    Ok(())
}

/// Run every operation of `script` on a fresh canvas.
pub fn run(script: &Script) -> Result<Canvas, AppError> {
    let mut canvas = Canvas::new(script.canvas)?;

    for operation in &script.operations {
        log::debug!("Running {:?}", operation);
        match operation {
            Operation::Line { name, start, end, algorithm } => {
                let context = fresh_context(&canvas, name)?;
                canvas.draw_line(*algorithm, *start, *end, &context)?;
            }
            Operation::Circle { name, center, radius } => {
                let context = fresh_context(&canvas, name)?;
                canvas.draw_circle(*center, *radius, &context);
            }
            Operation::Clip { lower, upper, algorithm, name } => {
                let window = Window::new(*lower, *upper);
                match name {
                    Some(name) => {
                        let id = lookup(&canvas, name)?;
                        canvas.clip_shape(id, &window, *algorithm)?;
                    }
                    None => {
                        let kept = canvas.clip_lines(&window, *algorithm);
                        log::info!("Clipped lines, {} still visible", kept);
                    }
                }
            }
            Operation::ResetVisibility => canvas.reset_visibility(),
            Operation::Remove { name } => {
                let id = lookup(&canvas, name)?;
                canvas.remove_shape(id)?;
            }
            Operation::Translate { name, dx, dy } => {
                transform(&mut canvas, name, Transformation::Translate { dx: *dx, dy: *dy })?;
            }
            Operation::Rotate { name, degrees, pivot } => {
                let rotate = Transformation::Rotate { degrees: *degrees, pivot: *pivot };
                transform(&mut canvas, name, rotate)?;
            }
            Operation::Scale { name, sx, sy, pivot } => {
                let scale = Transformation::Scale { sx: *sx, sy: *sy, pivot: *pivot };
                transform(&mut canvas, name, scale)?;
            }
            Operation::Reflect { name, x, y } => {
                transform(&mut canvas, name, Transformation::Reflect { x: *x, y: *y })?;
            }
        }
    }

    Ok(canvas)
}

/// Parse a script file.
pub fn load_script(path: &Path) -> Result<Script, AppError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Load, run and render a script file, saving the canvas when it asks to.
pub fn run_file(path: &Path) -> Result<String, AppError> {
    let script = load_script(path)?;
    let canvas = run(&script)?;
    if let Some(output) = &script.output {
        fs::write(output, canvas.to_json()?)?;
        log::info!("Saved canvas to: {:?}", output);
    }
    Ok(render(canvas.grid()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn script(json: &str) -> Script {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let s = script(r#"{"operations": [{"type": "line", "name": "a", "start": {"x": 0, "y": 0}, "end": {"x": 3, "y": 1}}]}"#);
        assert_eq!(s.canvas, CanvasConfig::default());
        assert!(s.output.is_none());
        assert!(matches!(
            &s.operations[0],
            Operation::Line { algorithm: LineAlgorithm::Bresenham, .. }
        ));
    }

    #[test]
    fn test_run_draw_transform_clip() {
        let s = script(
            r#"{
                "canvas": {"width": 12, "height": 12},
                "operations": [
                    {"type": "line", "name": "diag", "algorithm": "dda",
                     "start": {"x": 0, "y": 0}, "end": {"x": 9, "y": 9}},
                    {"type": "translate", "name": "diag", "dx": 1, "dy": 1},
                    {"type": "clip", "lower": {"x": 2, "y": 2}, "upper": {"x": 8, "y": 8},
                     "algorithm": "liang_barsky"}
                ]
            }"#,
        );
        let canvas = run(&s).unwrap();
        let grid = canvas.grid();
        assert!(!grid.get(1, 1).unwrap().visible);
        assert!(grid.get(2, 2).unwrap().visible);
        assert!(grid.get(8, 8).unwrap().visible);
        assert!(!grid.get(10, 10).unwrap().visible);
        assert!(!grid.get(0, 0).unwrap().selected);
    }

    #[test]
    fn test_unknown_shape() {
        let s = script(r#"{"operations": [{"type": "remove", "name": "ghost"}]}"#);
        assert!(matches!(run(&s), Err(AppError::UnknownShape(name)) if name == "ghost"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let s = script(
            r#"{"canvas": {"width": 10, "height": 10}, "operations": [
                {"type": "line", "name": "a", "start": {"x": 0, "y": 0}, "end": {"x": 5, "y": 0}},
                {"type": "circle", "name": "a", "center": {"x": 5, "y": 5}, "radius": 2}
            ]}"#,
        );
        assert!(matches!(run(&s), Err(AppError::DuplicateName(name)) if name == "a"));
    }

    #[test]
    fn test_name_reusable_after_remove() {
        let s = script(
            r#"{"canvas": {"width": 10, "height": 10}, "operations": [
                {"type": "line", "name": "a", "start": {"x": 0, "y": 0}, "end": {"x": 5, "y": 0}},
                {"type": "remove", "name": "a"},
                {"type": "line", "name": "a", "start": {"x": 0, "y": 3}, "end": {"x": 5, "y": 3}}
            ]}"#,
        );
        let canvas = run(&s).unwrap();
        assert_eq!(canvas.len(), 1);
        assert!(!canvas.grid().get(2, 0).unwrap().selected);
        assert!(canvas.grid().get(2, 3).unwrap().selected);
    }

    #[test]
    fn test_line_off_canvas_fails() {
        let s = script(
            r#"{"canvas": {"width": 4, "height": 4}, "operations": [
                {"type": "line", "name": "a", "start": {"x": 0, "y": 0}, "end": {"x": 9, "y": 0}}
            ]}"#,
        );
        assert!(matches!(run(&s), Err(AppError::Raster(RasterError::OutOfBounds { .. }))));
    }

    #[test]
    fn test_run_file_renders_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("canvas.json");
        let script_path = dir.path().join("script.json");
        let json = format!(
            r#"{{
                "canvas": {{"width": 5, "height": 5}},
                "output": {:?},
                "operations": [
                    {{"type": "circle", "name": "ring", "center": {{"x": 2, "y": 2}}, "radius": 1}},
                    {{"type": "reflect", "name": "ring", "x": true}}
                ]
            }}"#,
            output.to_string_lossy()
        );
        fs::File::create(&script_path)
            .unwrap()
            .write_all(json.as_bytes())
            .unwrap();

        let rendered = run_file(&script_path).unwrap();
        // x' = -x + 4 for x > 0, so the ring mirrors onto itself.
        assert_eq!(rendered, "     \n  #  \n # # \n  #  \n     \n");

        let saved = Canvas::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_demo_script_runs() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/clip.json");
        let script = load_script(&path).unwrap();
        let canvas = run(&script).unwrap();
        assert_eq!(canvas.len(), 3);
        let rendered = render(canvas.grid());
        assert_eq!(rendered.lines().count(), 16);
        assert!(rendered.contains('#'));
        assert!(rendered.contains('.'));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}

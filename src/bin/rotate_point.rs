//! Rotate a point about a line
//!
//! Values not given on the command line are prompted for on standard input,
//! in the order: point, angle, line start, line end. With `--json` the prompts
//! and matrices go to stderr and stdout holds only the JSON report.
//!
//! Usage:
//!   cargo run --bin rotate_point -- --point 1 0 0 --angle 90 --start 0 0 0 --end 0 0 1
//!   cargo run --bin rotate_point -- --lang zh --show-matrices

use std::io::{self, BufRead, Write};

use clap::Parser;
use line_rotation::display::{MatrixGrid, PointColumn};
use line_rotation::input::{self, InputError};
use line_rotation::locale::{Locale, Messages};
use line_rotation::{Angle, Cartesian3, LineRotation, Stage};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Rotate a 3D point by an angle about the line through two points
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Point to rotate
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    point: Option<Vec<f64>>,

    /// Rotation angle (degrees unless --radians is given)
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Line start point
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    start: Option<Vec<f64>>,

    /// Line end point
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    end: Option<Vec<f64>>,

    /// Interpret the angle as radians
    #[arg(long)]
    radians: bool,

    /// Print every intermediate transform matrix
    #[arg(long)]
    show_matrices: bool,

    /// Digits after the decimal point when printing matrices and points
    #[arg(long)]
    precision: Option<usize>,

    /// Prompt language (en, zh)
    #[arg(long, default_value_t = Locale::En)]
    lang: Locale,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Prefixes an error with a localized message
fn with_context<E: std::fmt::Display>(message: &str, err: E) -> Box<dyn std::error::Error> {
    format!("{}: {}", message, err).into()
}

/// Stream for prompts and diagnostics
///
/// With `--json` stdout carries only the JSON document, so everything else
/// goes to stderr.
fn console(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

/// Shows `prompt` on the console stream
fn show_prompt(prompt: &str, json: bool) -> Result<()> {
    let mut out = console(json);
    writeln!(out, "{}", prompt)?;
    out.flush()?;
    Ok(())
}

/// Uses the command line value when present, otherwise prompts for it
fn point_or_prompt<R: BufRead>(
    given: Option<Vec<f64>>,
    reader: &mut R,
    json: bool,
    prompt: &str,
    error: &str,
) -> Result<Cartesian3> {
    match given {
        Some(values) => {
            Cartesian3::try_from(values.as_slice()).map_err(|e| with_context(error, e))
        }
        None => {
            show_prompt(prompt, json)?;
            input::read_vector3(reader).map_err(|e| with_context(error, e))
        }
    }
}

fn read_angle<R: BufRead>(args: &Args, reader: &mut R, text: &Messages) -> Result<Angle> {
    let value = match args.angle {
        Some(value) => value,
        None => {
            let prompt = if args.radians {
                text.prompt_angle_radians
            } else {
                text.prompt_angle_degrees
            };
            show_prompt(prompt, args.json)?;
            input::read_real(reader).map_err(|e: InputError| with_context(text.error_angle, e))?
        }
    };

    Ok(if args.radians {
        Angle::from_radians(value)
    } else {
        Angle::from_degrees(value)
    })
}

/// Formats a point column honoring the optional precision
fn format_point(point: Cartesian3, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, PointColumn(point)),
        None => PointColumn(point).to_string(),
    }
}

fn print_matrices(
    out: &mut dyn Write,
    rotation: &LineRotation,
    precision: Option<usize>,
) -> Result<()> {
    for stage in Stage::ALL {
        let grid = MatrixGrid(rotation.stage(stage));
        writeln!(out, "{}:", stage)?;
        match precision {
            Some(p) => writeln!(out, "{:.*}\n", p, grid)?,
            None => writeln!(out, "{}\n", grid)?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    let text = args.lang.messages();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let point = point_or_prompt(
        args.point.clone(),
        &mut reader,
        args.json,
        text.prompt_point,
        text.error_point,
    )?;
    let angle = read_angle(&args, &mut reader, text)?;
    let start = point_or_prompt(
        args.start.clone(),
        &mut reader,
        args.json,
        text.prompt_line_start,
        text.error_line_start,
    )?;
    let end = point_or_prompt(
        args.end.clone(),
        &mut reader,
        args.json,
        text.prompt_line_end,
        text.error_line_end,
    )?;

    log::info!(
        "rotating {} by {} about line {} -> {}",
        point,
        angle,
        start,
        end
    );

    let rotation = LineRotation::new(start, end, angle.to_radians())
        .map_err(|e| with_context(text.error_rotation, e))?;
    let rotated = rotation.apply(point);
    log::debug!("rotated point {}", rotated);

    if args.show_matrices {
        print_matrices(&mut *console(args.json), &rotation, args.precision)?;
    }

    if args.json {
        let report = serde_json::json!({
            "original": point,
            "rotated": rotated,
            "angle": angle,
            "line": { "start": start, "end": end },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}\n{}\n",
            text.label_original,
            format_point(point, args.precision)
        );
        println!(
            "{}\n{}\n",
            text.label_rotated,
            format_point(rotated, args.precision)
        );
    }

    Ok(())
}

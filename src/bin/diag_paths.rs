//! Diagnostic: convert one DXF file and print the resulting path summary.

use anyhow::{bail, Context};
use dxfpath::{DxfConverter, PathCmd, Shape};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: diag_paths <file.dxf>");
            std::process::exit(1);
        }
    };

    let drawing = DxfConverter::new()
        .draw_text(true)
        .draw_mtext(true)
        .draw_dimensions(true)
        .convert_file(&path, 0.0, 0.0)
        .with_context(|| format!("failed to convert {path}"))?;

    for note in &drawing.notifications {
        eprintln!("  note: {note}");
    }

    if drawing.is_empty() {
        bail!("{path} contains no drawable entities");
    }

    println!("units:  {}", drawing.units);
    println!("scaled: {}", drawing.scaled);
    if let Some(bounds) = drawing.bounds {
        println!(
            "bounds: {:.4} x {:.4} in at ({:.4}, {:.4})",
            bounds.width(),
            bounds.height(),
            bounds.min.x,
            bounds.min.y
        );
    }

    println!("shapes: {}", drawing.shapes.len());
    for (i, shape) in drawing.shapes.iter().enumerate() {
        match shape {
            Shape::Path(path) => {
                let mut moves = 0;
                let mut lines = 0;
                let mut curves = 0;
                let mut arcs = 0;
                let mut closes = 0;
                for cmd in path.commands() {
                    match cmd {
                        PathCmd::MoveTo(_) => moves += 1,
                        PathCmd::LineTo(_) => lines += 1,
                        PathCmd::CurveTo { .. } => curves += 1,
                        PathCmd::Arc(_) | PathCmd::EllipticalArc(_) => arcs += 1,
                        PathCmd::Close => closes += 1,
                    }
                }
                println!(
                    "  {i:>4} path   moves={moves} lines={lines} curves={curves} arcs={arcs} closes={closes}"
                );
            }
            Shape::Circle { radius, .. } => {
                println!("  {i:>4} circle r={radius:.4}");
            }
            Shape::Ellipse { rx, ry, .. } => {
                println!("  {i:>4} ellipse {rx:.4} x {ry:.4}");
            }
            Shape::Arc(seg) => {
                println!(
                    "  {i:>4} arc    r={:.4} start={:.1} extent={:.1}",
                    seg.radius, seg.start, seg.extent
                );
            }
        }
    }

    Ok(())
}

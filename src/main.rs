use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use dielinekit::engine::{self, dxf_writer, BoxSpec, BoxStyle, DielineRequest, SheetSpec};

const USAGE: &str = "\
dielinekit - parametric cut/fold dieline generator

USAGE:
    dielinekit <style> [OPTIONS]
    dielinekit --spec <request.json> [--output <file.dxf>]
    dielinekit --list

STYLES:
    one_piece | shoebox | mailer | eco_shreds

OPTIONS (box styles, millimeters):
    --length <mm>       item length
    --width <mm>        item width
    --height <mm>       item height
    --padding <mm>      clearance added per side        [default: 5]
    --thickness <mm>    material thickness              [default: 3]
    --lid-depth <mm>    lid tray wall height (shoebox)  [default: 40]
    --kerf <mm>         cutting tool kerf (mailer)      [default: 0.1]

OPTIONS (eco_shreds, inches):
    --sheet-width <in>   sheet width
    --sheet-height <in>  sheet height

COMMON:
    -o, --output <file>  output path [default: box_<style>.dxf]
    --list               describe the available styles
    -h, --help           show this help
";

fn main() -> Result<()> {
    dielinekit::init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{USAGE}");
        return Ok(());
    }
    if args.iter().any(|a| a == "--list") {
        for style in BoxStyle::ALL {
            println!("{:<12} {}", style.tag(), style.description());
        }
        return Ok(());
    }

    let (request, output) = parse_args(&args)?;

    let design = engine::generate(&request)
        .with_context(|| format!("failed to generate '{}' dieline", request.style()))?;

    if let Some((min, max)) = design.bounds() {
        info!(
            primitives = design.len(),
            width_mm = max.x - min.x,
            height_mm = max.y - min.y,
            "generated {} dieline",
            request.style()
        );
    }

    dxf_writer::save_design(&design, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Saved {}", output.display());
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(DielineRequest, PathBuf)> {
    let mut style: Option<BoxStyle> = None;
    let mut spec_file: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut box_spec = BoxSpec::default();
    let mut sheet = SheetSpec::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| -> Result<&String> {
            iter.next()
                .with_context(|| format!("missing value for {name}"))
        };

        match arg.as_str() {
            "--spec" => spec_file = Some(PathBuf::from(value("--spec")?)),
            "-o" | "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--length" => box_spec.length = parse_num("--length", value("--length")?)?,
            "--width" => box_spec.width = parse_num("--width", value("--width")?)?,
            "--height" => box_spec.height = parse_num("--height", value("--height")?)?,
            "--padding" => box_spec.padding = parse_num("--padding", value("--padding")?)?,
            "--thickness" => {
                box_spec.thickness = parse_num("--thickness", value("--thickness")?)?
            }
            "--lid-depth" => {
                box_spec.lid_depth = parse_num("--lid-depth", value("--lid-depth")?)?
            }
            "--kerf" => box_spec.kerf = parse_num("--kerf", value("--kerf")?)?,
            "--sheet-width" => {
                sheet.width_in = parse_num("--sheet-width", value("--sheet-width")?)?
            }
            "--sheet-height" => {
                sheet.height_in = parse_num("--sheet-height", value("--sheet-height")?)?
            }
            tag if !tag.starts_with('-') && style.is_none() => {
                style = Some(tag.parse::<BoxStyle>()?);
            }
            other => bail!("unrecognized argument '{other}' (try --help)"),
        }
    }

    let request = if let Some(path) = spec_file {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str::<DielineRequest>(&text)
            .with_context(|| format!("invalid request in {}", path.display()))?
    } else {
        match style {
            Some(BoxStyle::OnePiece) => DielineRequest::OnePiece(box_spec),
            Some(BoxStyle::Shoebox) => DielineRequest::Shoebox(box_spec),
            Some(BoxStyle::Mailer) => DielineRequest::Mailer(box_spec),
            Some(BoxStyle::EcoShreds) => DielineRequest::EcoShreds(sheet),
            None => bail!("no style given (try --help)"),
        }
    };

    let output = output.unwrap_or_else(|| PathBuf::from(request.style().default_filename()));
    Ok((request, output))
}

fn parse_num(name: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .with_context(|| format!("{name} expects a number, got '{raw}'"))
}

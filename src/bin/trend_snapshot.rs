use incident_trend::api::{TrendChartConfig, TrendChartEngine};
use incident_trend::core::{DateRange, RangePreset, SystemClock, Viewport, parse_calendar_day};
use incident_trend::render::{NullRenderer, Renderer, SvgRenderer};
use incident_trend::telemetry::init_default_tracing;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Json,
}

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    range: RangeArg,
    viewport: Viewport,
    hover: Option<(f64, f64)>,
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy)]
enum RangeArg {
    Preset(RangePreset),
    Explicit {
        start: Option<chrono::NaiveDate>,
        end: Option<chrono::NaiveDate>,
    },
}

#[derive(Debug, Serialize)]
struct JsonSnapshot<'a> {
    range: DateRange,
    diagnostics: incident_trend::core::IngestDiagnostics,
    y_ticks: &'a [u32],
    hover: Option<incident_trend::interaction::HoverState>,
    frame: incident_trend::render::RenderFrame,
}

const USAGE: &str = "usage: trend_snapshot --input <path> [--start YYYY-MM-DD --end YYYY-MM-DD | --preset last7|last14|last30|last45|ytd] [--width <px>] [--height <px>] [--hover <x>,<y>] [--format svg|json] [--output <path>]";

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    let range = resolve_range(args.range)?;
    let config = TrendChartConfig::new(range).with_viewport(args.viewport);

    let rendered = match args.format {
        OutputFormat::Svg => {
            let renderer = SvgRenderer::new().with_aria_label("Incident trend");
            let mut engine = build_engine(renderer, config, &raw, args.hover)?;
            engine.render().map_err(|err| err.to_string())?;
            engine.into_renderer().into_document()
        }
        OutputFormat::Json => {
            let mut engine = build_engine(NullRenderer::default(), config, &raw, args.hover)?;
            let frame = engine.render_frame().map_err(|err| err.to_string())?;
            let snapshot = JsonSnapshot {
                range,
                diagnostics: engine.diagnostics(),
                y_ticks: engine.chart().scale().y_ticks(),
                hover: engine.hover_state(),
                frame,
            };
            serde_json::to_string_pretty(&snapshot)
                .map_err(|err| format!("failed to encode snapshot: {err}"))?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn build_engine<R: Renderer>(
    renderer: R,
    config: TrendChartConfig,
    payload: &str,
    hover: Option<(f64, f64)>,
) -> Result<TrendChartEngine<R>, String> {
    let mut engine = TrendChartEngine::new(renderer, config).map_err(|err| err.to_string())?;
    let diagnostics = engine
        .set_observations_json(payload)
        .map_err(|err| err.to_string())?;
    if !diagnostics.is_clean() {
        eprintln!(
            "warning: dropped {} of {} records ({} unparsable day, {} malformed)",
            diagnostics.rejected(),
            diagnostics.accepted + diagnostics.rejected(),
            diagnostics.unparsable_day,
            diagnostics.malformed
        );
    }
    if let Some((x, y)) = hover {
        engine.pointer_move(x, y);
    }
    Ok(engine)
}

fn resolve_range(range: RangeArg) -> Result<DateRange, String> {
    match range {
        RangeArg::Preset(preset) => Ok(preset.resolve(&SystemClock)),
        RangeArg::Explicit {
            start: Some(start),
            end: Some(end),
        } => Ok(DateRange::new(start, end)),
        RangeArg::Explicit { .. } => Err("--start and --end must be given together".to_owned()),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut preset = None::<RangePreset>;
    let mut start = None;
    let mut end = None;
    let mut viewport = Viewport::default();
    let mut hover = None;
    let mut format = OutputFormat::Svg;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}\n{USAGE}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value()?)),
            "--output" => output = Some(PathBuf::from(value()?)),
            "--start" => start = Some(parse_day_arg(&value()?)?),
            "--end" => end = Some(parse_day_arg(&value()?)?),
            "--preset" => preset = Some(parse_preset(&value()?)?),
            "--width" => viewport.width = parse_number(&flag, &value()?)?,
            "--height" => viewport.height = parse_number(&flag, &value()?)?,
            "--hover" => hover = Some(parse_hover(&value()?)?),
            "--format" => {
                format = match value()?.as_str() {
                    "svg" => OutputFormat::Svg,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("unknown format `{other}`\n{USAGE}")),
                }
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    let range = match (preset, start, end) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err("--preset cannot be combined with --start/--end".to_owned());
        }
        (Some(preset), None, None) => RangeArg::Preset(preset),
        (None, None, None) => RangeArg::Preset(RangePreset::default()),
        (None, start, end) => RangeArg::Explicit { start, end },
    };

    Ok(CliArgs {
        input,
        output,
        range,
        viewport,
        hover,
        format,
    })
}

fn parse_day_arg(raw: &str) -> Result<chrono::NaiveDate, String> {
    parse_calendar_day(raw).map_err(|err| err.to_string())
}

fn parse_preset(raw: &str) -> Result<RangePreset, String> {
    match raw {
        "last7" => Ok(RangePreset::Last7Days),
        "last14" => Ok(RangePreset::Last14Days),
        "last30" => Ok(RangePreset::Last30Days),
        "last45" => Ok(RangePreset::Last45Days),
        "ytd" => Ok(RangePreset::YearToDate),
        other => Err(format!("unknown preset `{other}`\n{USAGE}")),
    }
}

fn parse_number(flag: &str, raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|err| format!("invalid value `{raw}` for {flag}: {err}"))
}

fn parse_hover(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("--hover expects <x>,<y>, got `{raw}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid hover coordinate `{part}`: {err}"))
    };
    Ok((parse(x)?, parse(y)?))
}

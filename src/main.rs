use anyhow::{Context, Result};
use clap::Parser;
use csv3d::cloud::build_cloud;
use csv3d::mapper::{detect_best_columns, MappingSession};
use csv3d::parser::parse_axes;
use csv3d::{column, csv_reader, scale, CloudOptions};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "csv3d")]
#[command(about = "Map CSV data onto a normalized 3-D point cloud", long_about = None)]
struct Args {
    /// Axis assignment expression (e.g., 'axes(x: height, y: weight, z: species)').
    /// When omitted, the best columns are detected automatically.
    axes: Option<String>,

    /// Print per-column profiles as JSON and exit
    #[arg(long)]
    describe: bool,

    /// Side length of the display cube the cloud is centered into
    #[arg(long, default_value_t = scale::DEFAULT_SCALE)]
    scale: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read CSV from stdin
    let dataset = csv_reader::read_from_stdin().context("Failed to read CSV from stdin")?;

    if args.describe {
        let profiles: Vec<_> = dataset
            .headers
            .iter()
            .map(|name| column::analyze(&dataset, name))
            .collect();
        return write_json(&profiles, args.pretty);
    }

    // Explicit axes expression, or auto-detection
    let selection = match &args.axes {
        Some(expression) => match parse_axes(expression) {
            Ok((remaining, selection)) => {
                if !remaining.trim().is_empty() {
                    eprintln!("Warning: unparsed input: '{}'", remaining);
                }
                selection
            }
            Err(e) => {
                eprintln!("Parse error: {:?}", e);
                std::process::exit(1);
            }
        },
        None => detect_best_columns(&dataset),
    };

    let options = CloudOptions { scale: args.scale };
    let mut session = MappingSession::new();
    let cloud = build_cloud(&dataset, &selection, &mut session, &options);

    write_json(&cloud, args.pretty)
}

fn write_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut handle, value)
            .context("Failed to write JSON to stdout")?;
    } else {
        serde_json::to_writer(&mut handle, value).context("Failed to write JSON to stdout")?;
    }
    writeln!(handle)?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

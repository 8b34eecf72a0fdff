//! `chord_grid` - render the chord annotation backdrop grid to a PNG.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chord_grid::{ConfigOverrides, GridConfig, GridError, GridLayoutGenerator, GridResult};
use clap::Parser;
use log::{error, LevelFilter};

/// Command-line arguments for `chord_grid`.
#[derive(Parser, Debug)]
#[command(
    name = "chord_grid",
    version,
    about = "Render the measure/section guide grid used behind chord annotations"
)]
struct Cli {
    /// Output PNG path
    #[arg(short, long, value_name = "PATH", default_value = "chord_base.png")]
    out: PathBuf,

    /// JSON config file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Height of one measure band in pixels
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Number of measure bands
    #[arg(long, value_name = "N")]
    measures: Option<u32>,

    /// Width of each section in pixels
    #[arg(long, value_name = "PX")]
    section_width: Option<u32>,

    /// Left edge of a section (repeat for each section)
    #[arg(long = "anchor", value_name = "X", allow_negative_numbers = true)]
    anchors: Vec<i32>,

    /// Print line instructions as JSON lines instead of rendering
    #[arg(long)]
    dump_lines: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            measures: self.measures,
            section_width: self.section_width,
            section_anchors: (!self.anchors.is_empty()).then(|| self.anchors.clone()),
        }
    }

    fn build_config(&self) -> GridResult<GridConfig> {
        let base = match &self.config {
            Some(path) => GridConfig::from_json_file(path)?,
            None => GridConfig::default(),
        };
        Ok(self.overrides().apply(base))
    }
}

fn dump_lines(generator: &GridLayoutGenerator) -> GridResult<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in generator.lines() {
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> GridResult<()> {
    let config = cli.build_config()?;
    let generator = GridLayoutGenerator::new(config)?;

    if cli.dump_lines {
        return dump_lines(&generator);
    }

    let size = generator.canvas_size();
    if size.is_empty() {
        return Err(GridError::ImageError(format!(
            "{}x{} canvas has no pixels to save; use a larger --measures/--height or --dump-lines",
            size.width, size.height
        )));
    }

    generator.generate().save(&cli.out)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version also arrive here
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Arg, ArgAction, Command, value_parser};
use log::debug;

use bmpascii::render::DEFAULT_THRESHOLD;
use bmpascii::{AsciiRenderer, BmpError, BmpImage};

fn create_cmd_args() -> Command {
    Command::new("bmpascii")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render an uncompressed 24/32-bit BMP file as ASCII art")
        .arg(
            Arg::new("file")
                .help("BMP file to render")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .help("Luminance cutoff; B+G+R sums below this render dark")
                .value_parser(value_parser!(u16))
                .default_value("384"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity, repeat for trace output")
                .action(ArgAction::Count),
        )
}

fn setup_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = simple_logger::SimpleLogger::new().with_level(level).init();
}

fn run(path: &Path, threshold: u16) -> Result<(), BmpError> {
    let image = BmpImage::open(path)?;
    debug!(
        "{}: {}x{} {}-bit, stride {}",
        path.display(),
        image.width(),
        image.height(),
        image.bit_count(),
        image.stride()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    AsciiRenderer::with_threshold(threshold).render(&image, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let options = create_cmd_args().get_matches();
    setup_logger(options.get_count("verbose"));

    let Some(path) = options.get_one::<PathBuf>("file") else {
        eprintln!("error: missing BMP file argument");
        exit(1);
    };
    let threshold = options
        .get_one::<u16>("threshold")
        .copied()
        .unwrap_or(DEFAULT_THRESHOLD);

    if let Err(err) = run(path, threshold) {
        eprintln!("error: {}: {err}", path.display());
        exit(1);
    }
}

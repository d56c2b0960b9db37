use std::fs;
use std::io::{BufReader, BufWriter};
use std::process;

use clap::{App, Arg};

use ppmcarve::{PlainPpm, SeamCarver};

fn run() -> Result<(), failure::Error> {
    let matches = App::new("ppmcarve")
        .version("0.1.0")
        .about("Content-aware shrinking for plain PPM images")
        .arg(
            Arg::with_name("input")
                .help("The plain PPM image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width (default: keep the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height (default: keep the current height)"),
        )
        .get_matches();

    let reader = BufReader::new(fs::File::open(matches.value_of("input").unwrap())?);
    let image = PlainPpm::read(reader)?;
    let max_value = image.max_value;
    let mut carver = SeamCarver::new(image.grid);

    let new_width = match matches.value_of("width") {
        Some(w) => w.parse()?,
        None => carver.width(),
    };
    let new_height = match matches.value_of("height") {
        Some(h) => h.parse()?,
        None => carver.height(),
    };

    eprintln!(
        "carving {}x{} -> {}x{}",
        carver.width(),
        carver.height(),
        new_width,
        new_height
    );
    carver.carve_to(new_width, new_height)?;

    let writer = BufWriter::new(fs::File::create(matches.value_of("output").unwrap())?);
    PlainPpm {
        grid: carver.into_grid(),
        max_value,
    }
    .write(writer)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ppmcarve: {}", err);
        process::exit(1);
    }
}

extern crate clap;
extern crate env_logger;
extern crate gmandel;
#[macro_use]
extern crate log;
extern crate num;

use clap::{App, Arg, ArgMatches};
use gmandel::{
    render_exhaustive, Command, MandelError, Navigation, RenderStats, Rgb, Surface,
    TileScheduler, Viewport,
};
use num::Complex;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const SIZE: &str = "size";
const CENTER: &str = "center";
const HALF_WIDTH: &str = "half-width";
const GRID: &str = "grid";
const PAN_STEP: &str = "pan-step";
const ZOOM_FACTOR: &str = "zoom-factor";
const EXHAUSTIVE: &str = "exhaustive";
const PREVIEW: &str = "preview";
const COMMANDS: &str = "commands";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot explorer: renders a frame, then one more per navigation command")
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1280x720")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse image size"))
                .help("Size of the rendered frame"),
        )
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.5,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Point of the complex plane at the middle of the frame"),
        )
        .arg(
            Arg::with_name(HALF_WIDTH)
                .long(HALF_WIDTH)
                .short("w")
                .takes_value(true)
                .default_value("2.0")
                .validator(|s| {
                    validate_range(
                        &s,
                        ::std::f64::MIN_POSITIVE,
                        ::std::f64::MAX,
                        "Could not parse half-width",
                        "Half-width must be positive",
                    )
                })
                .help("Half the visible span of the real axis"),
        )
        .arg(
            Arg::with_name(GRID)
                .long(GRID)
                .short("g")
                .takes_value(true)
                .default_value("4")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        64,
                        "Could not parse tile grid",
                        "Tile grid must be between 1 and 64",
                    )
                })
                .help("Tiles along each side of the frame, one thread per tile"),
        )
        .arg(
            Arg::with_name(PAN_STEP)
                .long(PAN_STEP)
                .takes_value(true)
                .default_value("0.2")
                .validator(|s| {
                    validate_range(
                        &s,
                        0.0,
                        1.0,
                        "Could not parse pan step",
                        "Pan step must be between 0 and 1",
                    )
                })
                .help("Pan distance as a fraction of the half-width"),
        )
        .arg(
            Arg::with_name(ZOOM_FACTOR)
                .long(ZOOM_FACTOR)
                .takes_value(true)
                .default_value("1.5")
                .validator(|s| {
                    validate_range(
                        &s,
                        1.0,
                        100.0,
                        "Could not parse zoom factor",
                        "Zoom factor must be between 1 and 100",
                    )
                })
                .help("Ratio by which each zoom changes the half-width"),
        )
        .arg(
            Arg::with_name(EXHAUSTIVE)
                .long(EXHAUSTIVE)
                .short("e")
                .help("Evaluate every pixel instead of subdividing"),
        )
        .arg(
            Arg::with_name(PREVIEW)
                .long(PREVIEW)
                .short("p")
                .help("Print the last frame as text, '#' for points in the set"),
        )
        .arg(
            Arg::with_name(COMMANDS)
                .multiple(true)
                .validator(|s| {
                    Command::from_str(&s)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .help("Navigation: left, right, up, down, in (+), out (-), reset (f)"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, MandelError> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| MandelError::BadArgument(format!("Could not parse --{}", name)))
}

fn in_set(surface: &Surface) -> usize {
    surface
        .as_bytes()
        .chunks(3)
        .filter(|rgb| rgb.iter().all(|c| *c == 0))
        .count()
}

fn preview(surface: &Surface) {
    for y in 0..surface.height() {
        let line: String = (0..surface.width())
            .map(|x| match surface.get(x, y) {
                Some(Rgb(0, 0, 0)) => '#',
                _ => '.',
            })
            .collect();
        println!("{}", line);
    }
}

struct Session {
    viewport: Viewport,
    surface: Surface,
    scheduler: TileScheduler,
    exhaustive: bool,
    frames: usize,
}

impl Session {
    fn frame(&mut self) -> Result<(), MandelError> {
        let stats: RenderStats = if self.exhaustive {
            render_exhaustive(&self.viewport, &mut self.surface)
        } else {
            self.scheduler.render(&self.viewport, &mut self.surface)?
        };
        println!(
            "frame {}: {}x{} center=({}, {}) half_width={} in_set={} evaluated={} filled={}",
            self.frames,
            self.viewport.width(),
            self.viewport.height(),
            self.viewport.center.re,
            self.viewport.center.im,
            self.viewport.half_width(),
            in_set(&self.surface),
            stats.evaluated,
            stats.filled
        );
        self.frames += 1;
        Ok(())
    }
}

fn run(matches: &ArgMatches) -> Result<(), MandelError> {
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .ok_or_else(|| MandelError::BadArgument("Could not parse image size".to_string()))?;
    let center = matches
        .value_of(CENTER)
        .and_then(parse_complex)
        .ok_or_else(|| MandelError::BadArgument("Could not parse center point".to_string()))?;
    let navigation = Navigation {
        pan_step: value(matches, PAN_STEP)?,
        zoom_factor: value(matches, ZOOM_FACTOR)?,
    };
    let commands: Vec<Command> = match matches.values_of(COMMANDS) {
        Some(values) => values.map(Command::from_str).collect::<Result<_, _>>()?,
        None => Vec::new(),
    };

    let mut session = Session {
        viewport: Viewport::with_framing(width, height, center, value(matches, HALF_WIDTH)?)?,
        surface: Surface::new(width, height)?,
        scheduler: TileScheduler::new(value(matches, GRID)?)?,
        exhaustive: matches.is_present(EXHAUSTIVE),
        frames: 0,
    };

    session.frame()?;
    for command in commands {
        info!("applying {:?}", command);
        navigation.apply(&mut session.viewport, command);
        session.frame()?;
    }
    if matches.is_present(PREVIEW) {
        preview(&session.surface);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}

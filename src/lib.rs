use log::{debug, info, warn};
use plotters::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;
pub mod display;
pub mod error;
pub mod plot;

pub use error::{LoadError, ParseError};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// upper bound for the capacity taken from the header count
pub const MAX_CAPACITY_HINT: usize = 1_000_000;

/// radius of the svg markers, in pixels
pub const SVG_MARKER_SIZE: u32 = 4;
pub const SVG_SIZE: (u32, u32) = (1200, 900);

/// The first line of a set file.
/// Conventionally "count [dimension]", but any text is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub raw: String,
    pub count: Option<usize>,
    pub dimension: Option<usize>,
}

impl Header {
    pub fn parse(line: &str) -> Header {
        let mut tokens = line.split_whitespace();
        let count = tokens.next().and_then(|t| t.parse().ok());
        let dimension = tokens.next().and_then(|t| t.parse().ok());
        Header {
            raw: line.to_string(),
            count,
            dimension,
        }
    }
}

/// The main struct for the 2D coordinate set, two parallel sequences.
/// Only `push` appends, so x and y always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl CoordinateSet {
    pub fn new(capacity: usize) -> CoordinateSet {
        CoordinateSet {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }

    /// Read a set file.
    /// The file is closed when this returns, on success and on error.
    pub fn from_file<P: AsRef<Path>>(fin: P) -> Result<CoordinateSet, LoadError> {
        let path = fin.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        CoordinateSet::from_reader(BufReader::new(file))
    }

    /// Skip the header line, then parse one (x, y) pair per line.
    /// The header is never checked against the data,
    /// a different count is only reported as a warning.
    pub fn from_reader<R: BufRead>(mut buf: R) -> Result<CoordinateSet, LoadError> {
        let mut bytes: Vec<u8> = Vec::new();
        if read_line(&mut buf, &mut bytes, 1)? == 0 {
            debug!("empty input, no header line");
            return Ok(CoordinateSet::default());
        }
        // lines are decoded lossily, only the first two data tokens must be text
        let header = Header::parse(String::from_utf8_lossy(&bytes).trim_end_matches(&['\r', '\n'][..]));
        debug!(
            "header {:?}: count {:?}, dimension {:?}",
            header.raw, header.count, header.dimension
        );
        let capacity = header.count.unwrap_or(0).min(MAX_CAPACITY_HINT);
        let mut set = CoordinateSet::new(capacity);
        // line numbers are 1-based and the header is line 1
        let mut line = 1;
        loop {
            line += 1;
            if read_line(&mut buf, &mut bytes, line)? == 0 {
                break;
            }
            let (x, y) = parse_pair(&String::from_utf8_lossy(&bytes))
                .map_err(|source| LoadError::Parse { line, source })?;
            set.push(x, y);
        }
        match header.count {
            Some(count) if count != set.len() => warn!(
                "header announces {} pairs, found {}",
                count,
                set.len()
            ),
            _ => {}
        }
        info!("loaded {} pairs", set.len());
        Ok(set)
    }

    /// ranges of the plot axes, the data bounds plus a 5% margin
    pub fn plot_ranges(&self) -> (Range<f64>, Range<f64>) {
        (axis_range(&self.x), axis_range(&self.y))
    }

    /// plots the set as a scatter of filled red circles to svg
    pub fn plot_svg<P: AsRef<Path>>(&self, fout: P) -> Result<(), Box<dyn std::error::Error>> {
        let (xrange, yrange) = self.plot_ranges();
        let root = SVGBackend::new(fout.as_ref(), SVG_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(xrange, yrange)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 20))
            .x_desc("x")
            .y_desc("y")
            .y_label_formatter(&|y: &f64| format!("{:5}", y))
            .draw()?;
        let points = self
            .pairs()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| Circle::new((x, y), SVG_MARKER_SIZE, RED.filled()));
        chart.draw_series(points)?;
        root.present()?;
        Ok(())
    }
}

impl std::fmt::Display for CoordinateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n", self.len())?;
        for (x, y) in self.pairs() {
            write!(f, "{} {}\n", x, y)?
        }
        Ok(())
    }
}

/// reads one raw line, newline included, returns 0 at end of input
fn read_line<R: BufRead>(buf: &mut R, bytes: &mut Vec<u8>, line: usize) -> Result<usize, LoadError> {
    bytes.clear();
    buf.read_until(b'\n', bytes)
        .map_err(|source| LoadError::Read { line, source })
}

/// Parse one data line into (x, y).
/// Tokens after the second are ignored.
pub fn parse_pair(line: &str) -> Result<(f64, f64), ParseError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(x), Some(y)) => Ok((parse_value(x)?, parse_value(y)?)),
        (Some(_), None) => Err(ParseError::MissingToken { found: 1 }),
        _ => Err(ParseError::MissingToken { found: 0 }),
    }
}

fn parse_value(token: &str) -> Result<f64, ParseError> {
    token
        .parse()
        .map_err(|source| ParseError::InvalidNumber {
            token: token.to_string(),
            source,
        })
}

/// min and max of the finite values, None if there are none
pub fn min_and_max(s: &[f64]) -> Option<(f64, f64)> {
    let mut finite = s.iter().copied().filter(|v| v.is_finite());
    let first = finite.next()?;
    let (mut min, mut max) = (first, first);
    for es in finite {
        if es > max {
            max = es
        }
        if es < min {
            min = es
        }
    }
    Some((min, max))
}

fn axis_range(s: &[f64]) -> Range<f64> {
    match min_and_max(s) {
        Some((min, max)) if max > min => {
            let margin = (max - min) / 20.;
            (min - margin)..(max + margin)
        }
        Some((v, _)) => (v - 1.)..(v + 1.),
        None => 0.0..1.0,
    }
}

use super::VERSION;
use clap::{App, Arg};
use env_logger::Env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Settings taken from the CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArgs {
    pub input: PathBuf,
    pub svgout: Option<PathBuf>,
    pub verbose: bool,
}

/// Takes the CLI arguments that control the plotting of the set.
/// Returns None when no input file was given.
pub fn parse_cli() -> Option<PlotArgs> {
    parse_cli_from(std::env::args_os())
}

pub fn parse_cli_from<I, T>(args: I) -> Option<PlotArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let arg_input = Arg::with_name("input_file")
        .help("set file: a header line, then one \"x y\" pair per line")
        .index(1);
    let arg_rest = Arg::with_name("ignored")
        .help("further arguments are ignored")
        .index(2)
        .multiple(true)
        .hidden(true);
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("write the plot to this svg file instead of opening a window")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    let cli_args = App::new("set_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot a 2D coordinate set as a scatter plot")
        .arg(arg_input)
        .arg(arg_rest)
        .arg(arg_svgout)
        .arg(arg_verbose)
        .get_matches_from(args);
    let input = PathBuf::from(cli_args.value_of_os("input_file")?);
    let svgout = cli_args.value_of_os("output_svgfile").map(PathBuf::from);
    let verbose = cli_args.is_present("verbose");
    Some(PlotArgs {
        input,
        svgout,
        verbose,
    })
}

/// warn by default, info with --verbose; RUST_LOG takes precedence
pub fn init_logger(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_file() {
        assert_eq!(parse_cli_from(vec!["set_plot"]), None);
        assert_eq!(parse_cli_from(vec!["set_plot", "-v"]), None);
    }

    #[test]
    fn input_file_only() {
        let args = parse_cli_from(vec!["set_plot", "data/sin_1000.mset"]).unwrap();
        assert_eq!(args.input, PathBuf::from("data/sin_1000.mset"));
        assert_eq!(args.svgout, None);
        assert!(!args.verbose);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let args = parse_cli_from(vec!["set_plot", "set.mset", "x", "y"]).unwrap();
        assert_eq!(args.input, PathBuf::from("set.mset"));
        assert_eq!(args.svgout, None);
    }

    #[test]
    fn svg_output_and_verbose() {
        let args = parse_cli_from(vec!["set_plot", "set.mset", "-o", "set.svg", "--verbose"]).unwrap();
        assert_eq!(args.input, PathBuf::from("set.mset"));
        assert_eq!(args.svgout, Some(PathBuf::from("set.svg")));
        assert!(args.verbose);
    }
}

use anyhow::{anyhow, Context};
use log::info;
use set_plot::display;
use set_plot::plot::{init_logger, parse_cli};
use set_plot::CoordinateSet;

fn main() -> anyhow::Result<()> {
    let args = match parse_cli() {
        Some(args) => args,
        None => {
            println!("Filename expected");
            return Ok(());
        }
    };
    init_logger(args.verbose);

    info!("read data from {}", args.input.display());
    let set = CoordinateSet::from_file(&args.input)
        .with_context(|| format!("could not load {}", args.input.display()))?;

    match args.svgout {
        Some(svgout) => {
            info!("plot to {}", svgout.display());
            set.plot_svg(&svgout)
                .map_err(|e| anyhow!("could not plot to {}: {}", svgout.display(), e))?;
        }
        None => {
            let title = format!("set_plot - {}", args.input.display());
            display::render(&set, &title).map_err(|e| anyhow!("could not show the plot: {}", e))?;
        }
    }
    Ok(())
}

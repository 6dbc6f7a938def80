use std::process;

use stats_view::{ColorGenerator, StatsView};

use crate::app::App;

mod app;
mod cli;

fn main() {
    env_logger::init();

    let args = cli::get_args();

    let spec = match args.style() {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("stats-view: {}", err);
            process::exit(2);
        }
    };
    log::info!("style: {:?}", spec);

    let colors = match args.seed {
        Some(seed) => ColorGenerator::seeded(seed),
        None => ColorGenerator::from_entropy(),
    };

    App::new(StatsView::new(&spec, colors), args.values());
}

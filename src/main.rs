use std::path::PathBuf;

use clap::Parser;
use starboard::app::StarboardApp;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON board file; the built-in sample board is used when omitted.
    #[arg(long)]
    board_file: Option<PathBuf>,

    /// First year of the initial time window.
    #[arg(long, default_value_t = 2015)]
    start_year: i32,

    /// Last year of the initial time window.
    #[arg(long, default_value_t = 2035)]
    end_year: i32,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "starboard",
        options,
        Box::new(move |cc| {
            Ok(Box::new(StarboardApp::new(
                cc,
                args.board_file.clone(),
                (args.start_year, args.end_year),
            )))
        }),
    )
}

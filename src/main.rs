// What you SEE:
// • A black window with a red square in the bottom-left corner.
// • A green square that bounces off the edges and falls under gravity.
// • No size arguments: fullscreen at the primary display's resolution.
// • `pixel-bounce W H x` shows the diagnostic view instead: a dark blue quad on white.
// • ESC quits. A frame-rate line is printed every 32 frames.

use pixel_bounce::ticks::Ticks;
use pixel_bounce::window::MinifbWindow;
use pixel_bounce::{App, Config, Error};

fn run(config: &Config) -> Result<u64, Error> {
    /* --- Window first: no display means nothing else is worth setting up --- */
    let window = MinifbWindow::open(config)?;
    let app = App::new(window, config, Ticks::start())?;
    app.run()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1));
    log::debug!("{config:?}");

    if let Err(error) = run(&config) {
        log::error!("{error}");
        println!("ERROR: {error}");
        std::process::exit(1);
    }
}

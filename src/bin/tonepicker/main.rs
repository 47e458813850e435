//! tonepicker - pick and preview the notification tone
//!
//! Run with: cargo run --bin tonepicker

mod app;
mod logging;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let mut terminal = ratatui::init();
    let result = App::new().run(&mut terminal);
    ratatui::restore();
    result
}

mod app;
mod event;
mod tui;
mod ui;
mod view;

pub use view::DeckView;

use color_eyre::Result;
use log::info;

use app::App;

/// Opens the terminal viewer on a finished build and blocks until the user
/// quits.
pub fn launch(view: DeckView) -> Result<()> {
    info!("client: launching deck viewer for {}", view.title);
    let mut app = App::new(view);
    app.run()
}

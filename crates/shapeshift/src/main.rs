use clap::Parser;
use shapeshift_config::Config;

mod app;
mod cli;
mod logging;
mod surface;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.write_config {
        let path = Config::default().save()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = Config::load()?;
    cli.apply(&mut config);
    logging::init(config.log)?;

    let (cols, rows) = crossterm::terminal::size()?;
    let app = App::new(&config, cli.mode(), cols, rows);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

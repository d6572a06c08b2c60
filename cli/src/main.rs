use clap::Parser;
use crossnorm::{App, Cli};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crossnorm::logging::init(cli.verbose);

    let app = App::new(crossnorm::config::load_config());
    app.run(cli.command).await
}

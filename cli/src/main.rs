mod commands;
mod report;
mod terminal;

use commands::CommandLine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();
    terminal::print::banner(commands.no_banner);

    let cfg = commands.into_config();
    commands::scan::run(cfg).await
}

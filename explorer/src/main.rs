use clap::Parser;
use explorer::{config::Cli, parse_selector, render_query, Explorer};
use movegraph::move_graph;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.plain {
        colored::control::set_override(false);
    }

    // Answer a single query and exit, if one was given
    if let (Some(piece), Some(square)) = (&cli.piece, cli.square) {
        let selector = parse_selector(piece)?;
        print!("{}", render_query(move_graph(), selector, square));
        return Ok(());
    }

    Explorer::new().run()
}

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use movegraph::{move_graph, MoveGraph, PieceKind, Square};

/// Print the precomputed move graph, one line per origin square.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Piece to print, as a number between 1 and 7 or a name. Prints every piece if omitted.
    #[arg(short, long)]
    piece: Option<PieceKind>,

    /// Only print the number of moves from each square
    #[arg(short, long)]
    counts: bool,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

fn print_table(graph: &MoveGraph, kind: PieceKind, counts: bool) {
    println!(
        "{} {}",
        format!("[{}]", kind.selector()).bold(),
        kind.name().to_uppercase().bold()
    );

    for origin in Square::iter() {
        let moves = graph.lookup(kind, origin);
        if moves.is_empty() {
            continue;
        }

        if counts {
            println!("{} -> {}", origin.to_string().cyan(), moves.len());
        } else {
            let moves = moves
                .iter()
                .map(Square::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("{} -> {moves}", origin.to_string().cyan());
        }
    }

    println!("{} {}\n", "total:".dimmed(), graph.edge_count(kind));
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    if args.plain {
        colored::control::set_override(false);
    }

    let graph = move_graph();
    match args.piece {
        Some(kind) => print_table(graph, kind, args.counts),
        None => PieceKind::iter().for_each(|kind| print_table(graph, kind, args.counts)),
    }

    Ok(())
}

use std::{
    io::{self, Write},
    sync::{
        mpsc::{self, Sender},
        LazyLock,
    },
};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use log::{debug, error, warn};
use movegraph::{move_graph, MoveGraph, PieceKind, Square};
use threadpool::ThreadPool;

use crate::{
    config::{BANNER, BANNER_COLOR, COL_PROMPT, PIECE_PROMPT, SQUARE_PROMPT},
    display::{format_destinations, BoardView, TableView},
};

/// Threadpool from which to spawn threads for user input.
pub static POOL: LazyLock<ThreadPool> = LazyLock::new(|| ThreadPool::new(num_cpus::get()));

/// Interactive front-end for a [`MoveGraph`].
///
/// The user picks a piece from a numbered menu, then the square it stands on,
/// and the explorer prints a board with every square that piece can reach marked.
///
/// Input is read on a separate thread and forwarded as [`ExplorerCommand`]s,
/// so the main loop is the only place anything is printed or looked up.
#[derive(Debug)]
pub struct Explorer {
    /// The graph all lookups are made in.
    graph: &'static MoveGraph,

    /// Selector of the piece chosen by the user, awaiting a square.
    pending: Option<i64>,

    /// Row entered on its own line, awaiting a column.
    row: Option<i64>,
}

impl Explorer {
    /// Construct a new [`Explorer`] over the process-wide [`MoveGraph`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Main entrypoint of the explorer.
    ///
    /// This function prints the banner and menu, then awaits user input via `stdin`.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", BANNER.color(BANNER_COLOR));
        let name = env!("CARGO_PKG_NAME");
        let version = env!("CARGO_PKG_VERSION");
        println!("{name} {version}\n");

        let (sender, receiver) = mpsc::channel();

        // Spin up a thread for handling user input
        POOL.execute(move || {
            if let Err(err) = Self::user_input_handler(sender) {
                error!("{err}");
            }
        });

        self.menu();
        prompt(PIECE_PROMPT)?;

        // Main event loop: Handle inputs until told to exit
        for cmd in receiver {
            debug!("received {cmd:?}");
            match cmd {
                ExplorerCommand::Exit => break,
                cmd => self.execute(cmd),
            }

            let next = match (self.pending, self.row) {
                (Some(_), Some(_)) => COL_PROMPT,
                (Some(_), None) => SQUARE_PROMPT,
                (None, _) => PIECE_PROMPT,
            };
            prompt(next)?;
        }

        Ok(())
    }

    /// Enter a perpetual loop to handle input over `stdin` from the user.
    ///
    /// This function only exits if an error occurs or it receives the input `exit`.
    fn user_input_handler(sender: Sender<ExplorerCommand>) -> Result<()> {
        let mut buffer = String::with_capacity(256);

        loop {
            // Clear the buffer, read input, and trim the trailing newline
            buffer.clear();
            let bytes = io::stdin()
                .read_line(&mut buffer)
                .context("Failed to read line from stdin")?;
            let buf = buffer.trim();

            // For ctrl + d
            if 0 == bytes {
                warn!("Explorer received input of 0 bytes and is quitting");
                sender
                    .send(ExplorerCommand::Exit)
                    .context("Received empty input from stdin")?;
                return Ok(());
            }

            // Ignore empty lines
            if buf.is_empty() {
                continue;
            }

            let cmd = ExplorerCommand::parse(buf).unwrap_or_else(ExplorerCommand::Invalid);
            let exit = matches!(cmd, ExplorerCommand::Exit);

            sender
                .send(cmd)
                .with_context(|| format!("Failed to send command {buf:?} to explorer"))?;

            if exit {
                return Ok(());
            }
        }
    }

    /// Executes a single command, printing its results.
    pub fn execute(&mut self, cmd: ExplorerCommand) {
        match cmd {
            ExplorerCommand::Help => self.help(),
            ExplorerCommand::Menu => self.menu(),
            ExplorerCommand::Table(kind) => println!("{}\n", TableView::new(self.graph, kind)),
            ExplorerCommand::Number(n) => match (self.pending, self.row.take()) {
                (Some(_), Some(row)) => self.place(Square::saturating(row, n)),
                (Some(_), None) => self.row = Some(n),
                (None, _) => self.pending = Some(n),
            },
            ExplorerCommand::Select(selector) => {
                self.row = None;
                self.pending = Some(selector);
            }
            ExplorerCommand::Place(origin) => self.place(origin),
            ExplorerCommand::Query(selector, origin) => {
                self.pending = None;
                self.row = None;
                self.query(selector, origin);
            }
            ExplorerCommand::Invalid(err) => {
                debug!("{err:#}");
                self.row = None;
                if self.pending.is_some() {
                    println!("Invalid input. Please enter a position as two numbers, such as `3 4`.");
                } else {
                    println!("Invalid input. Please enter a valid number or 'exit' to quit.");
                }
            }
            ExplorerCommand::Exit => {}
        }
    }

    /// Places the pending piece on `origin` and executes the query.
    fn place(&mut self, origin: Square) {
        self.row = None;
        match self.pending.take() {
            Some(selector) => self.query(selector, origin),
            None => println!("Choose a piece before choosing a square."),
        }
    }

    /// Executes a query, printing the board with every destination marked.
    ///
    /// Unknown selectors and off-board squares are not errors; they simply have nowhere to go.
    pub fn query(&self, selector: i64, origin: Square) {
        println!("{}", render_query(self.graph, selector, origin));
    }

    /// Executes the `help` command, printing the available commands.
    fn help(&self) {
        println!("available commands: <piece>, <row> <col>, <piece> <row> <col>, menu, table <piece>, help, exit");
    }

    /// Executes the `menu` command, printing the numbered list of pieces.
    fn menu(&self) {
        println!("Choose a chess piece:");
        for kind in PieceKind::iter() {
            println!("{}. {}", kind.selector(), title_case(kind.name()));
        }
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self {
            graph: move_graph(),
            pending: None,
            row: None,
        }
    }
}

/// Represents a command that can be sent to the explorer.
#[derive(Debug)]
pub enum ExplorerCommand {
    /// Display the list of available commands.
    Help,

    /// Display the numbered list of pieces.
    Menu,

    /// Display the number of moves from every square for a piece.
    Table(PieceKind),

    /// A lone number: a piece selector, or the row of a square once a piece has been chosen.
    Number(i64),

    /// Choose a piece by name, to be placed by a following [`ExplorerCommand::Place`].
    Select(i64),

    /// Choose the square for the previously selected piece.
    Place(Square),

    /// Choose a piece and its square at once.
    Query(i64, Square),

    /// Input that could not be understood.
    Invalid(anyhow::Error),

    /// Stop exploring.
    Exit,
}

impl ExplorerCommand {
    /// Parses a line of user input.
    ///
    /// A piece name selects a piece, a pair of numbers places it, and a piece followed by a pair does both.
    /// A lone [`ExplorerCommand::Number`] is left to the explorer, since its meaning depends on what was asked.
    /// Selectors are not range-checked here, since unknown pieces are allowed to have no moves.
    pub fn parse(input: &str) -> Result<Self> {
        let (cmd, rest) = input.split_once(' ').unwrap_or((input, ""));

        match cmd.to_ascii_lowercase().as_str() {
            "help" => return Ok(Self::Help),
            "menu" => return Ok(Self::Menu),
            "exit" | "quit" => return Ok(Self::Exit),
            "table" => {
                let Ok(kind) = rest.parse::<PieceKind>() else {
                    bail!("usage: table <piece>");
                };
                return Ok(Self::Table(kind));
            }
            _ => {}
        }

        if let Ok(n) = input.parse::<i64>() {
            return Ok(Self::Number(n));
        }

        // Names may contain spaces, like `white pawn`
        if let Ok(kind) = input.parse::<PieceKind>() {
            return Ok(Self::Select(kind.selector() as i64));
        }

        let parts = input
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();

        match parts.as_slice() {
            [_, _] => input.parse().map(Self::Place),
            [piece @ .., row, col] if !piece.is_empty() => Ok(Self::Query(
                parse_selector(&piece.join(" "))?,
                format!("{row},{col}").parse()?,
            )),
            _ => bail!("Invalid input: {input:?}"),
        }
    }
}

/// Parses a piece selector, which is either a number or the name of a piece.
pub fn parse_selector(s: &str) -> Result<i64> {
    if let Ok(selector) = s.trim().parse::<i64>() {
        return Ok(selector);
    }

    let kind = s
        .parse::<PieceKind>()
        .with_context(|| format!("Invalid piece: {s:?}"))?;
    Ok(kind.selector() as i64)
}

/// Renders the result of a query as a board followed by the list of destinations.
pub fn render_query(graph: &MoveGraph, selector: i64, origin: Square) -> String {
    let piece = PieceKind::from_selector(selector).ok();
    let destinations = graph.lookup_selector(selector, origin);

    let title = match piece {
        Some(kind) => format!("{} at {origin}", title_case(kind.name())),
        None => format!("Unknown piece {selector} at {origin}"),
    };

    format!(
        "{title}\n{}\n{} moves: {}\n",
        BoardView::new(piece, origin, destinations),
        destinations.len(),
        format_destinations(destinations)
    )
}

/// Capitalizes the first letter of every word in `s`.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints `text` without a trailing newline, so input appears on the same line.
fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush().context("Failed to flush stdout")
}

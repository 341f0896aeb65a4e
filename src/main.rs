//! Analysis CLI: search a position once and print the verdict.
//!
//! Usage: `patzer [FEN] [--depth N | --difficulty NAME] [--style NAME]`
//! With no FEN the starting position is analyzed.

use anyhow::{bail, Context, Result};
use tracing::info;

use patzer_core::{move_to_san, Board, STARTING_FEN};
use patzer_engine::{Difficulty, SearchOptions, Searcher, Style};

struct Args {
    fen: String,
    depth: Option<u32>,
    difficulty: Difficulty,
    style: Style,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        fen: STARTING_FEN.to_string(),
        depth: None,
        difficulty: Difficulty::Medium,
        style: Style::Balanced,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" => {
                let value = iter.next().context("--depth needs a value")?;
                args.depth = Some(value.parse().context("--depth must be a number")?);
            }
            "--difficulty" => {
                let value = iter.next().context("--difficulty needs a value")?;
                args.difficulty = Difficulty::from_name(&value)
                    .with_context(|| format!("unknown difficulty \"{value}\""))?;
            }
            "--style" => {
                let value = iter.next().context("--style needs a value")?;
                args.style = Style::from_name(&value)
                    .with_context(|| format!("unknown style \"{value}\""))?;
            }
            other if other.starts_with("--") => bail!("unknown option \"{other}\""),
            fen => args.fen = fen.to_string(),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = parse_args()?;
    let board: Board = args
        .fen
        .parse()
        .with_context(|| format!("invalid FEN \"{}\"", args.fen))?;

    info!(fen = %board, "analyzing position");
    println!("{}", board.pretty());

    let mut searcher = Searcher::new();
    let result = match args.depth {
        Some(depth) => searcher.search(&board, &SearchOptions::fixed_depth(depth)),
        None => searcher.calculate_ai_move(&board, args.difficulty, args.style),
    };

    match result.best_move {
        Some(best) => println!("\nbest move: {}", move_to_san(&board, best)),
        None => println!("\nno legal moves"),
    }
    println!(
        "eval: {:+.2} pawns (depth {}, {} nodes, {} ms)",
        result.evaluation as f64 / 100.0,
        result.depth,
        result.nodes,
        result.elapsed_ms
    );
    if !result.pv.is_empty() {
        let line: Vec<String> = result.pv.iter().map(ToString::to_string).collect();
        println!("line: {}", line.join(" "));
    }
    for note in &result.explanation {
        println!("  {note}");
    }

    Ok(())
}

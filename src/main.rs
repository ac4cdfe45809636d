//! Terminal front-end. All game logic lives in the library; this file
//! only wires input, output, and the dice roll-off together.

use anyhow::Result;
use clap::Parser;
use dicey_tictactoe::{
    AiMoveSource, Cli, Contest, HumanMoveSource, MatchEvent, MoveSource, OpponentKind,
    Orchestrator, Side, roll_off,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    // One stdin reader feeds every human player. Lines are parsed as
    // cell numbers 1-9; everything else is ignored here, occupied
    // cells are filtered by the move source.
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let input_rx = Arc::new(Mutex::new(input_rx));
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if let Ok(cell) = line.trim().parse::<usize>()
                && (1..=9).contains(&cell)
                && input_tx.send(cell - 1).is_err()
            {
                break;
            }
        }
    });

    let mover_x: Box<dyn MoveSource> = Box::new(HumanMoveSource::new(
        cli.name.clone(),
        Arc::clone(&input_rx),
    ));
    let (o_name, mover_o): (String, Box<dyn MoveSource>) = match cli.opponent {
        OpponentKind::Ai => {
            let ai = AiMoveSource::new(Side::O, cli.depth);
            (ai.name().to_string(), Box::new(ai))
        }
        OpponentKind::Human => (
            cli.opponent_name.clone(),
            Box::new(HumanMoveSource::new(
                cli.opponent_name.clone(),
                Arc::clone(&input_rx),
            )),
        ),
    };

    let roll = roll_off(&mut rand::rng());
    let starting = roll.starting_side();
    if !cli.json {
        println!(
            "The dice are rolling! {}: {} - {}: {}.",
            cli.name, roll.x, o_name, roll.o
        );
        println!("Type a cell number (1-9) and press enter to play.");
    }

    let contest = Contest::new(cli.name.clone(), o_name, starting);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::new(contest, mover_x, mover_o, event_tx);
    let handle = tokio::spawn(orchestrator.run());

    while let Some(event) = event_rx.recv().await {
        if cli.json {
            println!("{}", serde_json::to_string(&event)?);
            continue;
        }
        match event {
            MatchEvent::RoundStarted { round, starting } => {
                println!("\nRound {round}: {starting} starts.");
            }
            MatchEvent::AwaitingInput { name } => println!("{name}'s turn."),
            MatchEvent::Thinking { name } => println!("{name} is thinking..."),
            MatchEvent::MoveMade { name, index } => {
                println!("{name} plays cell {}.", index + 1);
            }
            MatchEvent::BoardChanged(rendered) => println!("{rendered}"),
            MatchEvent::RoundOver {
                winner,
                score_x,
                score_o,
            } => match winner {
                Some(name) => println!("{name} wins the round! Score: {score_x}-{score_o}."),
                None => println!("Draw! Score: {score_x}-{score_o}."),
            },
            MatchEvent::MatchOver { winner } => println!("{winner} wins the match!"),
        }
    }

    handle.await??;
    Ok(())
}

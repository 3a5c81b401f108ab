use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use hand_output::{load_settings, GameOutput, HandController};
use hand_protocol::Move;

#[derive(Parser, Debug)]
struct Args {
    /// Serial port the hand is attached to.
    #[arg(long)]
    port: Option<String>,
    /// Baud rate of the serial link.
    #[arg(long)]
    baud: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(baud) = args.baud {
        settings.baud = baud;
    }

    let controller = HandController::connect(settings).await?;
    println!("Hand connected; idling through the animation rotation.");

    controller.enter_idle().await?;
    tokio::time::sleep(Duration::from_secs(25)).await;

    println!("Playing one scripted round.");
    controller.on_game_start().await?;
    for remaining in (1..=3).rev() {
        controller.on_countdown_tick(remaining).await?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    controller.on_move_chosen(Move::Scissors).await?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    controller.on_tie().await?;
    controller.on_score_update(0, 0).await?;
    controller.on_game_stop().await?;

    controller.enter_idle().await?;
    tokio::time::sleep(Duration::from_secs(15)).await;

    controller.shutdown().await?;
    Ok(())
}

use std::{env, error::Error, thread, time::Duration};

use chesslink::{Board, SerialTransport};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: leds <serial_port> [pattern]");
        println!();
        println!("serial_port should be a port name like /dev/ttyUSB0 or COM3");
        println!("pattern is a raw firmware LED pattern; a default is used if omitted");
        return Ok(());
    }

    // A slow blanket pattern covering the whole 9x9 LED grid.
    let pattern = match args.get(2) {
        Some(pattern) => pattern.clone(),
        None => format!("50{}", "C4".repeat(81)),
    };

    let port = serial::open(&args[1])?;
    let mut board = Board::new(SerialTransport::new(port)?);

    println!("Lighting LEDs on {}", args[1]);
    board.leds(&pattern)?;
    thread::sleep(Duration::from_secs(5));

    println!("Extinguishing");
    board.leds_off()?;

    board.disconnect();
    Ok(())
}

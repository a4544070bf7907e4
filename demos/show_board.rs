use std::{env, error::Error};

use chesslink::{Board, SerialTransport};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: show_board <serial_port>");
        println!();
        println!("serial_port should be a port name like /dev/ttyUSB0 or COM3");
        return Ok(());
    }

    let port = serial::open(&args[1])?;
    let mut board = Board::new(SerialTransport::new(port)?);

    println!("Board firmware {} at {}", board.version()?, args[1]);
    println!("{}", board.position()?);

    board.disconnect();
    Ok(())
}

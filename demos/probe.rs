use std::{env, error::Error};

use chesslink::{probe_ports, PortId};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let candidates: Vec<PortId> = env::args().skip(1).map(PortId).collect();
    if candidates.is_empty() {
        println!("Usage: probe <serial_port>...");
        println!();
        println!("serial_port should be a port name like /dev/ttyUSB0 or COM3");
        println!("Each candidate is tested for a responsive board in turn");
        return Ok(());
    }

    let found = probe_ports(candidates, |id| serial::open(&id.0));
    if found.is_empty() {
        println!("No boards found.");
    } else {
        for port in &found {
            println!("Board found at {}", port);
        }
    }
    Ok(())
}

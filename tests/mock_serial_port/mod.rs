use std::io::{self, Cursor, Read, Write};
use std::time::Duration;

use serial_core::{PortSettings, SerialDevice};

#[allow(dead_code)] // Tests use different subsets of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialFailure {
    None,
    WriteSettings,
    Read,
}

/// Mock serial port implementation that plays the device's side of a probe:
/// reply data becomes readable only after something has been written, and a
/// drained port reports a timeout like real hardware would.
#[derive(Debug)]
pub struct MockSerialPort {
    failure: SerialFailure,
    reply: Cursor<Vec<u8>>,
    armed: bool,
    timeout: Duration,
    settings: PortSettings,
}

impl MockSerialPort {
    pub fn new(reply: Vec<u8>, failure: SerialFailure) -> Self {
        MockSerialPort {
            failure,
            reply: Cursor::new(reply),
            armed: false,
            timeout: Duration::from_secs(0),
            // Initialize settings to some weird defaults to verify we set them correctly later.
            settings: PortSettings {
                baud_rate: serial_core::BaudRate::Baud110,
                char_size: serial_core::CharSize::Bits7,
                parity: serial_core::Parity::ParityEven,
                stop_bits: serial_core::StopBits::Stop2,
                flow_control: serial_core::FlowControl::FlowSoftware,
            },
        }
    }
}

impl Read for MockSerialPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.failure == SerialFailure::Read {
            return Err(io::Error::new(io::ErrorKind::Other, "Dummy I/O error"));
        }
        if !self.armed {
            // Nothing written yet, so nothing to reply to.
            return Err(io::Error::new(io::ErrorKind::TimedOut, "Operation timed out"));
        }
        match self.reply.read(buf) {
            Ok(0) => Err(io::Error::new(io::ErrorKind::TimedOut, "Operation timed out")),
            other => other,
        }
    }
}

impl Write for MockSerialPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.armed = true;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SerialDevice for MockSerialPort {
    type Settings = PortSettings;

    fn read_settings(&self) -> serial_core::Result<Self::Settings> {
        Ok(self.settings)
    }

    fn write_settings(&mut self, settings: &Self::Settings) -> serial_core::Result<()> {
        match self.failure {
            SerialFailure::WriteSettings => Err(serial_core::Error::new(
                serial_core::ErrorKind::NoDevice,
                "Dummy serial error",
            )),
            _ => {
                self.settings = *settings;
                Ok(())
            }
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn set_timeout(&mut self, timeout: Duration) -> serial_core::Result<()> {
        self.timeout = timeout;
        Ok(())
    }

    fn set_rts(&mut self, _: bool) -> serial_core::Result<()> {
        unimplemented!();
    }

    fn set_dtr(&mut self, _: bool) -> serial_core::Result<()> {
        unimplemented!();
    }

    fn read_cts(&mut self) -> serial_core::Result<bool> {
        unimplemented!();
    }

    fn read_dsr(&mut self) -> serial_core::Result<bool> {
        unimplemented!();
    }

    fn read_ri(&mut self) -> serial_core::Result<bool> {
        unimplemented!();
    }

    fn read_cd(&mut self) -> serial_core::Result<bool> {
        unimplemented!();
    }
}

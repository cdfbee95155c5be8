// SPDX-License-Identifier: GPL-3.0-only

use std::io::{BufRead, BufReader, Read};
use std::thread;

use cdrom_contracts::DriveCommand;
use cdrom_engine::Request;
use cdrom_types::{DeviceId, DriveState};
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::view::ControlsView;

pub const HELP: &str = "commands: mount, unmount, open, status, refresh, quit";

/// One line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Engine(Request),
    Status,
    Help,
}

pub fn parse_line(line: &str) -> Option<Input> {
    let input = match line.trim().to_ascii_lowercase().as_str() {
        "" => return None,
        "mount" => Input::Engine(Request::Command(DriveCommand::Mount)),
        "unmount" | "umount" => Input::Engine(Request::Command(DriveCommand::Unmount)),
        "open" => Input::Engine(Request::Command(DriveCommand::Open)),
        "refresh" => Input::Engine(Request::Refresh),
        "quit" | "exit" => Input::Engine(Request::Shutdown),
        "status" => Input::Status,
        _ => Input::Help,
    };
    Some(input)
}

/// Read commands from `reader` on a dedicated thread.
///
/// Blocking reads cannot be cancelled, so they stay off the runtime; the
/// process can exit while the thread still waits for a line.
pub fn spawn_reader<R>(
    reader: R,
    requests: mpsc::Sender<Request>,
    latest: watch::Receiver<Option<DriveState>>,
    device: DeviceId,
) -> std::io::Result<thread::JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("cdrom-input".to_string())
        .spawn(move || forward_lines(BufReader::new(reader), requests, latest, device))
}

/// Feed lines from `reader` to the engine until `quit`, end of input, or
/// the engine goes away. End of input counts as `quit`.
pub fn forward_lines<R: BufRead>(
    reader: R,
    requests: mpsc::Sender<Request>,
    latest: watch::Receiver<Option<DriveState>>,
    device: DeviceId,
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("failed to read input: {e}");
                break;
            }
        };

        match parse_line(&line) {
            None => {}
            Some(Input::Help) => println!("{HELP}"),
            Some(Input::Status) => {
                let state = latest.borrow().clone();
                println!("{}", ControlsView::from_state(state.as_ref(), &device));
            }
            Some(Input::Engine(request)) => {
                if requests.blocking_send(request).is_err() || request == Request::Shutdown {
                    return;
                }
            }
        }
    }

    debug!("input closed");
    let _ = requests.blocking_send(Request::Shutdown);
}

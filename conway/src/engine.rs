//! Engine thread: hosts a [`Controller`] on its own single-threaded runtime
//! and takes commands from any other thread, typically a GUI.

use std::thread::{self, JoinHandle};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::LocalSet;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::controller::{Controller, Frame};
use crate::error::{EngineError, Result};
use crate::patterns::PATTERNS;

/// Requests the presentation layer can make of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Toggle { row: usize, col: usize },
    Clear,
    /// Index into [`PATTERNS`].
    LoadPattern(usize),
    Randomize(u64),
    Shutdown,
}

/// Handle for driving the engine thread.
pub struct EngineHandle {
    thread: Option<JoinHandle<()>>,
    command_tx: mpsc::UnboundedSender<Command>,
    frame_rx: watch::Receiver<Frame>,
    rows: usize,
    cols: usize,
}

impl EngineHandle {
    /// Starts the engine thread and waits until its controller exists.
    ///
    /// # Panics
    ///
    /// Blocks the calling thread, so it panics if called from inside an
    /// async runtime.
    pub fn spawn(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = oneshot::channel();

        let thread = thread::Builder::new()
            .name("conway-engine".into())
            .spawn(move || run_engine(config, command_rx, ready_tx))?;

        let frame_rx = match ready_rx.blocking_recv() {
            Ok(Ok(frame_rx)) => frame_rx,
            Ok(Err(err)) => {
                let _ = thread.join();
                return Err(err);
            }
            Err(_) => {
                let _ = thread.join();
                return Err(EngineError::EngineGone);
            }
        };

        Ok(Self {
            thread: Some(thread),
            command_tx,
            frame_rx,
            rows: config.rows,
            cols: config.cols,
        })
    }

    /// Queues a command; it runs after everything queued before it.
    pub fn send(&self, command: Command) {
        if self.command_tx.send(command).is_err() {
            warn!("engine thread is gone, command dropped");
        }
    }

    pub fn start(&self) {
        self.send(Command::Start);
    }

    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    pub fn clear(&self) {
        self.send(Command::Clear);
    }

    /// Checks the cell is on the grid before queueing the flip.
    pub fn toggle(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.send(Command::Toggle { row, col });
        Ok(())
    }

    /// Latest frame the engine has published.
    pub fn frame(&self) -> Frame {
        self.frame_rx.borrow().clone()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Stops the engine and joins its thread.
    pub fn shutdown(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.command_tx.send(Command::Shutdown);
            if thread.join().is_err() {
                warn!("engine thread panicked");
            }
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_engine(
    config: EngineConfig,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
    ready_tx: oneshot::Sender<Result<watch::Receiver<Frame>>>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ready_tx.send(Err(err.into()));
            return;
        }
    };
    let controller = match Controller::new(&config) {
        Ok(controller) => controller,
        Err(err) => {
            let _ = ready_tx.send(Err(err));
            return;
        }
    };
    if ready_tx.send(Ok(controller.subscribe())).is_err() {
        return;
    }

    let local = LocalSet::new();
    local.block_on(&runtime, async move {
        while let Some(command) = command_rx.recv().await {
            debug!(?command, "engine command");
            match command {
                Command::Start => controller.start(),
                Command::Stop => controller.stop(),
                Command::Toggle { row, col } => {
                    if let Err(err) = controller.toggle(row, col) {
                        warn!(%err, "toggle rejected");
                    }
                }
                Command::Clear => controller.clear(),
                Command::LoadPattern(index) => match PATTERNS.get(index) {
                    Some(pattern) => controller.load_pattern(pattern),
                    None => warn!(index, "no pattern at index"),
                },
                Command::Randomize(seed) => controller.randomize(seed),
                Command::Shutdown => break,
            }
        }
        controller.stop();
    });
    debug!("engine thread exiting");
}

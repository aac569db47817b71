// controller.rs - Tick scheduling on a single-threaded task queue

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::Pattern;
use crate::simulation::{ChainId, Simulation};

/// What the presentation layer gets to see after each committed change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub grid: Grid,
    pub generation: u64,
    pub running: bool,
}

impl Frame {
    fn of(sim: &Simulation) -> Self {
        Self {
            grid: sim.grid().clone(),
            generation: sim.generation(),
            running: sim.is_running(),
        }
    }
}

struct Shared {
    sim: RefCell<Simulation>,
    frames: watch::Sender<Frame>,
}

impl Shared {
    fn publish(&self) {
        let frame = Frame::of(&self.sim.borrow());
        self.frames.send_replace(frame);
    }
}

/// Owns the simulation and drives it at a fixed cadence.
///
/// Ticks run as a task spawned with [`tokio::task::spawn_local`], so the
/// controller must be used from inside a [`tokio::task::LocalSet`]. Every
/// operation runs to completion synchronously on that same thread, so a
/// toggle or clear is always seen by the next tick.
pub struct Controller {
    shared: Rc<Shared>,
    tick_interval: Duration,
}

impl Controller {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let sim = Simulation::new(config)?;
        let (frames, _) = watch::channel(Frame::of(&sim));
        Ok(Self {
            shared: Rc::new(Shared {
                sim: RefCell::new(sim),
                frames,
            }),
            tick_interval: config.tick_interval,
        })
    }

    /// Begins continuous evolution. Does nothing if already running.
    ///
    /// # Panics
    ///
    /// Panics if called outside a [`tokio::task::LocalSet`], since the tick
    /// chain is spawned with [`tokio::task::spawn_local`].
    pub fn start(&self) {
        let Some(chain) = self.shared.sim.borrow_mut().start() else {
            return;
        };
        self.shared.publish();
        tokio::task::spawn_local(run_ticks(Rc::clone(&self.shared), chain, self.tick_interval));
    }

    /// Halts evolution; no tick mutates the grid after this returns.
    pub fn stop(&self) {
        self.shared.sim.borrow_mut().stop();
        self.shared.publish();
    }

    pub fn is_running(&self) -> bool {
        self.shared.sim.borrow().is_running()
    }

    pub fn generation(&self) -> u64 {
        self.shared.sim.borrow().generation()
    }

    /// Flips one cell in either state; returns the cell's new value.
    pub fn toggle(&self, row: usize, col: usize) -> Result<bool> {
        let alive = self.shared.sim.borrow_mut().toggle(row, col)?;
        self.shared.publish();
        Ok(alive)
    }

    pub fn clear(&self) {
        self.shared.sim.borrow_mut().clear();
        self.shared.publish();
    }

    pub fn load_pattern(&self, pattern: &Pattern) {
        self.shared.sim.borrow_mut().load_pattern(pattern);
        self.shared.publish();
    }

    pub fn randomize(&self, seed: u64) {
        self.shared.sim.borrow_mut().randomize(seed);
        self.shared.publish();
    }

    /// Copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.shared.sim.borrow().grid().clone()
    }

    /// Receiver that sees a new [`Frame`] after every committed change.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.shared.frames.subscribe()
    }
}

/// Dropping the controller stops it, so its tick chain exits on the next
/// wake and releases the frame channel.
impl Drop for Controller {
    fn drop(&mut self) {
        self.shared.sim.borrow_mut().stop();
        self.shared.publish();
    }
}

/// One tick chain: step, sleep, repeat until the simulation refuses a tick.
async fn run_ticks(shared: Rc<Shared>, chain: ChainId, interval: Duration) {
    loop {
        // Borrow ends before the await below.
        if !shared.sim.borrow_mut().tick(chain) {
            break;
        }
        shared.publish();
        tokio::time::sleep(interval).await;
    }
    debug!(chain, "tick chain finished");
}

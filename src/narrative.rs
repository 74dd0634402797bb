//! Narrative Text Worker
//!
//! Fire-and-forget flavor text: a death epitaph built from the final stats
//! and a short line on each level-up. Generation happens on a detached
//! worker thread so a slow or absent backend can never stall a tick, and
//! any failure degrades to a fixed fallback string instead of surfacing
//! into the simulation.
//!
//! Requests carry the run generation current at issue time; [`NarrativeWorker::poll`]
//! silently drops responses from a previous run, since there is no
//! cancellation primitive for an in-flight request.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::Result;

use crate::stats::GameStats;

/// Shown when the epitaph backend fails or is unreachable.
pub const FALLBACK_EPITAPH: &str = "The darkness is too thick to hear the Lord's voice.";
/// Shown when the level-up backend fails or is unreachable.
pub const FALLBACK_FLAVOR: &str = "Power surges through you.";
/// Placeholder the UI can show while an epitaph request is in flight.
pub const PENDING_EPITAPH: &str = "Consulting the void...";

/// Backend that turns run outcomes into flavor text. Implementations may
/// block and may fail; both are absorbed by the worker.
pub trait NarrativeGenerator: Send + 'static {
    /// Short epitaph for a finished run.
    fn death_epitaph(&self, stats: &GameStats) -> Result<String>;
    /// One intense line for reaching `level`.
    fn level_up_flavor(&self, level: u32) -> Result<String>;
}

/// Offline generator returning the fallback strings. Used when no backend
/// credential is configured.
pub struct FallbackNarrative;

impl NarrativeGenerator for FallbackNarrative {
    fn death_epitaph(&self, _stats: &GameStats) -> Result<String> {
        Ok(FALLBACK_EPITAPH.to_string())
    }
    fn level_up_flavor(&self, _level: u32) -> Result<String> {
        Ok(FALLBACK_FLAVOR.to_string())
    }
}

enum Request {
    Epitaph { generation: u64, stats: GameStats },
    Flavor { generation: u64, level: u32 },
    Shutdown,
}

/// Which request a response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeKind {
    Epitaph,
    LevelUpFlavor,
}

/// A completed narrative response.
#[derive(Debug, Clone)]
pub struct NarrativeText {
    pub kind: NarrativeKind,
    pub text: String,
    generation: u64,
}

/// Handle to the narrative worker thread.
pub struct NarrativeWorker {
    tx: Sender<Request>,
    rx: Receiver<NarrativeText>,
    thread: Option<JoinHandle<()>>,
    generation: u64,
}

impl NarrativeWorker {
    /// Spawn the worker around a generator backend.
    pub fn spawn<G: NarrativeGenerator>(generator: G) -> Self {
        let (tx, rx_cmd) = mpsc::channel::<Request>();
        let (tx_evt, rx) = mpsc::channel::<NarrativeText>();

        let thread = thread::Builder::new()
            .name("narrative-worker".to_string())
            .spawn(move || worker_loop(generator, rx_cmd, tx_evt))
            .expect("failed to spawn narrative worker");

        Self {
            tx,
            rx,
            thread: Some(thread),
            generation: 0,
        }
    }

    /// Mark the start of a new run. Responses issued for earlier runs are
    /// discarded by [`poll`](Self::poll) from now on.
    pub fn begin_run(&mut self) {
        self.generation += 1;
    }

    /// Current run generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request an epitaph for the finished run. Never blocks.
    pub fn request_epitaph(&self, stats: GameStats) {
        let _ = self.tx.send(Request::Epitaph {
            generation: self.generation,
            stats,
        });
    }

    /// Request a level-up line. Never blocks.
    pub fn request_flavor(&self, level: u32) {
        let _ = self.tx.send(Request::Flavor {
            generation: self.generation,
            level,
        });
    }

    /// Pull the next completed response, dropping any that belong to a
    /// previous run. Returns `None` when nothing current is ready.
    pub fn poll(&self) -> Option<NarrativeText> {
        while let Ok(text) = self.rx.try_recv() {
            if text.generation == self.generation {
                return Some(text);
            }
            log::debug!("dropping stale narrative response (run {})", text.generation);
        }
        None
    }
}

impl Drop for NarrativeWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(Request::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn worker_loop<G: NarrativeGenerator>(
    generator: G,
    rx: Receiver<Request>,
    tx: Sender<NarrativeText>,
) {
    while let Ok(request) = rx.recv() {
        let response = match request {
            Request::Epitaph { generation, stats } => NarrativeText {
                kind: NarrativeKind::Epitaph,
                text: generator.death_epitaph(&stats).unwrap_or_else(|err| {
                    log::warn!("epitaph generation failed: {err:#}");
                    FALLBACK_EPITAPH.to_string()
                }),
                generation,
            },
            Request::Flavor { generation, level } => NarrativeText {
                kind: NarrativeKind::LevelUpFlavor,
                text: generator.level_up_flavor(level).unwrap_or_else(|err| {
                    log::warn!("flavor generation failed: {err:#}");
                    FALLBACK_FLAVOR.to_string()
                }),
                generation,
            },
            Request::Shutdown => break,
        };
        if tx.send(response).is_err() {
            break;
        }
    }
}

//! Clock/driver: one loop iteration per tick
//!
//! Poll a batch of input, stop on quit, step the game, hand the frame to a
//! sink, then wait out the game's tick interval. Input, output and pacing are
//! traits so the loop runs the same against a window, a script or a test.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::game::Game;
use crate::input::{InputEvent, should_quit};
use crate::render::Frame;

/// Supplies one batch of pending input per tick
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn poll(&mut self) -> Vec<InputEvent> {
        (**self).poll()
    }
}

/// Receives each finished frame
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Enforces the delay between ticks
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Sleeps the calling thread
#[derive(Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Runs ticks back to back
#[derive(Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn wait(&mut self, _interval: Duration) {}
}

/// Replays recorded batches, then asks to quit
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }

    /// Parse a JSON array of batches (each an array of events)
    pub fn from_json(json: &str) -> Result<Self> {
        let batches: Vec<Vec<InputEvent>> =
            serde_json::from_str(json).context("Invalid input script")?;
        Ok(Self::new(batches))
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Never produces input; the run ends on the tick limit
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Writes each frame as one line of JSON
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")
    }
}

/// Drops frames (for runs where only the final state matters)
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _frame: &Frame) -> io::Result<()> {
        Ok(())
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Stopped by a quit event rather than the tick limit
    pub quit: bool,
}

/// Owns a game and the collaborators around it
pub struct Driver<G, I, S, P> {
    pub game: G,
    input: I,
    sink: S,
    pacer: P,
    tick: u64,
}

impl<G: Game, I: InputSource, S: FrameSink, P: Pacer> Driver<G, I, S, P> {
    pub fn new(game: G, input: I, sink: S, pacer: P) -> Self {
        Self {
            game,
            input,
            sink,
            pacer,
            tick: 0,
        }
    }

    /// Run one tick; returns false when a quit event arrived instead
    pub fn step(&mut self) -> io::Result<bool> {
        let events = self.input.poll();
        if should_quit(&events) {
            return Ok(false);
        }

        self.game.tick(&events);
        self.tick += 1;

        let frame = Frame {
            tick: self.tick,
            commands: self.game.draw(),
        };
        self.sink.present(&frame)?;
        self.pacer.wait(self.game.tick_interval());
        Ok(true)
    }

    /// Loop until quit, or until `max_ticks` ticks have run
    pub fn run(&mut self, max_ticks: Option<u64>) -> io::Result<RunSummary> {
        log::info!("{} starting", self.game.name());
        let start = self.tick;
        let quit = loop {
            if max_ticks.is_some_and(|max| self.tick - start >= max) {
                break false;
            }
            if !self.step()? {
                break true;
            }
        };

        let summary = RunSummary {
            ticks: self.tick - start,
            quit,
        };
        log::info!(
            "{} stopped after {} ticks ({})",
            self.game.name(),
            summary.ticks,
            if quit { "quit" } else { "tick limit" }
        );
        Ok(summary)
    }

    pub fn into_parts(self) -> (G, I, S, P) {
        (self.game, self.input, self.sink, self.pacer)
    }
}

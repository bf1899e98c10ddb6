// src/platform/mock.rs

use crate::platform::{Platform, TerminalDims};
use anyhow::Result;

/// A scripted [`Platform`] for tests: fixed dimensions, recorded frames, and
/// step waits that return immediately.
pub struct MockPlatform {
    dims: TerminalDims,
    rendered_frames: Vec<String>,
    steps_waited: usize,
}

impl MockPlatform {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            dims: TerminalDims { rows, cols },
            rendered_frames: Vec::new(),
            steps_waited: 0,
        }
    }

    /// Every frame rendered so far, in order.
    pub fn rendered_frames(&self) -> &[String] {
        &self.rendered_frames
    }

    /// How many times the loop blocked for a step trigger.
    pub fn steps_waited(&self) -> usize {
        self.steps_waited
    }
}

impl Platform for MockPlatform {
    fn dimensions(&self) -> TerminalDims {
        self.dims
    }

    fn render(&mut self, frame: &str) -> Result<()> {
        self.rendered_frames.push(frame.to_string());
        Ok(())
    }

    fn wait_for_step(&mut self) -> Result<()> {
        self.steps_waited += 1;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}

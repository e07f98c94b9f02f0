//! Pulling samples out of a block graph.

use crate::{Block, Result, Sample, Signal};

/// Drives a set of output signals sample by sample, in lockstep.
///
/// Every channel is read once per index, in increasing order, starting at 0.
/// The position carries across calls, so a host can render one buffer per
/// audio callback without filter state ever seeing an index twice.
///
/// # Examples
///
/// ```
/// use blockdsp::{Block, Renderer, identity};
///
/// let graph = Block::<f32>::sine(44100, 440.0_f32).split(identity(2));
/// let mut renderer = Renderer::new(&graph, &[]);
///
/// let first = renderer.render(64);
/// let second = renderer.render(64);
/// assert_eq!(first.len(), 2);
/// assert_eq!(second[0].len(), 64);
/// assert_eq!(renderer.position(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<S> {
    outputs: Vec<Signal<S>>,
    position: usize,
}

impl<S: Sample> Renderer<S> {
    /// Runs `block` on `inputs` and prepares to read its outputs.
    ///
    /// # Arguments
    ///
    /// * `block` - Graph to render
    /// * `inputs` - One signal per block input; empty for a generator graph
    ///
    /// # Errors
    ///
    /// Fails if `inputs` does not match the block's input count.
    pub fn try_new(block: &Block<S>, inputs: &[Signal<S>]) -> Result<Self> {
        Ok(Self::from_signals(block.try_process(inputs)?))
    }

    /// Runs `block` on `inputs` and prepares to read its outputs.
    ///
    /// # Arguments
    ///
    /// * `block` - Graph to render
    /// * `inputs` - One signal per block input; empty for a generator graph
    ///
    /// # Panics
    ///
    /// Panics if `inputs` does not match the block's input count.
    pub fn new(block: &Block<S>, inputs: &[Signal<S>]) -> Self {
        Self::from_signals(block.process(inputs))
    }

    /// Reads the given signals directly.
    pub fn from_signals(outputs: Vec<Signal<S>>) -> Self {
        Self {
            outputs,
            position: 0,
        }
    }

    /// Number of channels rendered.
    pub fn channels(&self) -> usize {
        self.outputs.len()
    }

    /// Index of the next sample to be rendered.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Renders the next `frames` samples of every channel.
    ///
    /// Returns one buffer per channel.
    ///
    /// # Panics
    ///
    /// Panics if the position would overflow `usize`.
    pub fn render(&mut self, frames: usize) -> Vec<Vec<S>> {
        let end = self.end_of(frames);
        let mut planar = vec![Vec::with_capacity(frames); self.outputs.len()];
        self.for_each_frame(end, |channel, sample| planar[channel].push(sample));
        planar
    }

    /// Renders the next `frames` samples as interleaved frames.
    ///
    /// # Panics
    ///
    /// Panics if the position would overflow `usize`.
    pub fn render_interleaved(&mut self, frames: usize) -> Vec<S> {
        let end = self.end_of(frames);
        let mut interleaved =
            Vec::with_capacity(frames.saturating_mul(self.outputs.len()));
        self.for_each_frame(end, |_, sample| interleaved.push(sample));
        interleaved
    }

    fn end_of(&self, frames: usize) -> usize {
        match self.position.checked_add(frames) {
            Some(end) => end,
            None => panic!(
                "render position overflows: {} + {frames}",
                self.position
            ),
        }
    }

    fn for_each_frame(&mut self, end: usize, mut sink: impl FnMut(usize, S)) {
        tracing::trace!(
            position = self.position,
            frames = end - self.position,
            channels = self.outputs.len(),
            "render cycle"
        );
        for index in self.position..end {
            for (channel, signal) in self.outputs.iter().enumerate() {
                sink(channel, signal.at(index));
            }
        }
        self.position = end;
    }
}

//! Read-only snapshots of the plate temperature field and their consumers.

use std::{
    convert::Infallible,
    io::{self, Write},
};

/// Row-major snapshot of every node's current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Frame {
    pub(super) fn new(width: usize, height: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the value at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        (x < self.width && y < self.height).then(|| self.values[x + y * self.width])
    }

    /// Returns all values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over rows, ceiling first.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.width)
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Consumer of plate frames, such as a renderer or a recorder.
pub trait FrameSink {
    /// Error returned when a frame cannot be consumed.
    type Error;

    /// Consumes one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to accept the frame.
    fn record(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

/// Sink keeping every frame in memory.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl FrameSink for FrameRecorder {
    type Error = Infallible;

    fn record(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Sink writing each frame as a whitespace-separated matrix block.
///
/// One line per row, ceiling first, followed by a line holding `e`.
/// This is the inline matrix format a plotting process reads from a pipe.
#[derive(Debug)]
pub struct MatrixWriter<W> {
    writer: W,
}

impl<W: Write> MatrixWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for MatrixWriter<W> {
    type Error = io::Error;

    fn record(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        for row in frame.rows() {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(self.writer, "{first}")?;
            }
            for value in values {
                write!(self.writer, " {value}")?;
            }
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "e")?;
        self.writer.flush()
    }
}

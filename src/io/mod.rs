//! Simplex tree I/O.
//!
//! This module provides trait-based readers and writers for loading and
//! saving a [`SimplexTree`] as a stream of filtered simplices. The text codec
//! lives in [`text`].

pub mod text;

use crate::simplex_error::SimplexTreeError;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::tree::SimplexTree;
use std::io::{Read, Write};

pub use text::{TextFormat, TextReader, TextWriter, WriteOrder};

/// Trait for readers that build a simplex tree from a byte stream.
pub trait SimplexTreeReader {
    /// Parse a tree from a reader.
    ///
    /// Either the whole input is accepted or an error is returned; no
    /// partially built tree escapes.
    fn read<V, F, D, R>(&self, reader: R) -> Result<SimplexTree<V, F, D>, SimplexTreeError>
    where
        V: VertexLike,
        F: FiltrationLike,
        D: PayloadLike,
        R: Read;
}

/// Trait for writers that serialize a simplex tree.
pub trait SimplexTreeWriter {
    /// Write `tree` to a writer.
    fn write<V, F, D, W>(
        &self,
        writer: W,
        tree: &SimplexTree<V, F, D>,
    ) -> Result<(), SimplexTreeError>
    where
        V: VertexLike,
        F: FiltrationLike,
        D: PayloadLike,
        W: Write;
}

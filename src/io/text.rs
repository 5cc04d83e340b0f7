//! Plain-text simplex tree format.
//!
//! # Format
//! One simplex per line: its vertices, then its filtration value, separated
//! by whitespace.
//!
//! ```text
//! # vertices (highest first) then filtration
//! 0 0.1
//! 1 0.1
//! 1 0 0.2
//! ```
//!
//! - Blank lines and lines starting with the comment prefix are skipped.
//! - Vertices may appear in any order on read; they are written highest first.
//! - Lines are inserted one by one without their faces, so a file written
//!   from a closed tree reads back into the same tree.

use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;

use itertools::Itertools;

use crate::io::{SimplexTreeReader, SimplexTreeWriter};
use crate::simplex_error::SimplexTreeError;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::simplex::FilteredSimplex;
use crate::topology::tree::{SimplexHandle, SimplexTree};

/// Order in which a writer emits simplices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteOrder {
    /// Filtration order (faces before cofaces at equal value).
    #[default]
    Filtration,
    /// Depth-first trie order.
    Tree,
}

/// Options shared by [`TextReader`] and [`TextWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// Lines starting with this prefix are comments. Empty disables comments.
    pub comment_prefix: String,
    pub order: WriteOrder,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            order: WriteOrder::Filtration,
        }
    }
}

impl TextFormat {
    fn is_skipped(&self, line: &str) -> bool {
        line.is_empty()
            || (!self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix))
    }
}

/// Text reader.
#[derive(Debug, Default, Clone)]
pub struct TextReader {
    pub format: TextFormat,
}

/// Text writer.
#[derive(Debug, Default, Clone)]
pub struct TextWriter {
    pub format: TextFormat,
}

impl TextReader {
    pub fn new(format: TextFormat) -> Self {
        Self { format }
    }

    fn parse_record<V, F>(
        line: &str,
        line_no: usize,
    ) -> Result<FilteredSimplex<V, F>, SimplexTreeError>
    where
        V: VertexLike,
        F: FiltrationLike,
    {
        let err = |message: String| SimplexTreeError::Parse {
            line: line_no,
            message,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((raw_filtration, raw_vertices)) = tokens.split_last() else {
            return Err(err("empty record".into()));
        };
        if raw_vertices.is_empty() {
            return Err(err(
                "expected at least one vertex followed by a filtration value".into(),
            ));
        }
        let filtration = raw_filtration
            .parse::<F>()
            .map_err(|_| err(format!("invalid filtration value `{raw_filtration}`")))?;
        let vertices = raw_vertices
            .iter()
            .map(|raw| {
                let v = raw
                    .parse::<V>()
                    .map_err(|_| err(format!("invalid vertex `{raw}`")))?;
                if v == V::null_vertex() {
                    return Err(err(format!("vertex {v} is reserved")));
                }
                Ok(v)
            })
            .collect::<Result<Vec<V>, _>>()?;
        Ok(FilteredSimplex::new(vertices, filtration))
    }
}

impl SimplexTreeReader for TextReader {
    fn read<V, F, D, R>(&self, reader: R) -> Result<SimplexTree<V, F, D>, SimplexTreeError>
    where
        V: VertexLike,
        F: FiltrationLike,
        D: PayloadLike,
        R: Read,
    {
        let mut records = Vec::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if self.format.is_skipped(line) {
                continue;
            }
            records.push(Self::parse_record(line, idx + 1)?);
        }
        log::debug!("text reader: {} records", records.len());
        Ok(SimplexTree::from_simplices(records))
    }
}

impl TextWriter {
    pub fn new(format: TextFormat) -> Self {
        Self { format }
    }
}

impl SimplexTreeWriter for TextWriter {
    fn write<V, F, D, W>(
        &self,
        mut writer: W,
        tree: &SimplexTree<V, F, D>,
    ) -> Result<(), SimplexTreeError>
    where
        V: VertexLike,
        F: FiltrationLike,
        D: PayloadLike,
        W: Write,
    {
        let handles: Vec<SimplexHandle<V>> = match self.format.order {
            WriteOrder::Filtration => tree.filtration_simplex_range().to_vec(),
            WriteOrder::Tree => tree.complex_simplex_range().collect(),
        };
        for sh in handles {
            writeln!(
                writer,
                "{} {}",
                tree.simplex_vertex_range(sh).join(" "),
                tree.filtration_of(sh)
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Same layout as [`TextWriter`] with the default format.
impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> fmt::Display for SimplexTree<V, F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &sh in self.filtration_simplex_range() {
            writeln!(
                f,
                "{} {}",
                self.simplex_vertex_range(sh).join(" "),
                self.filtration_of(sh)
            )?;
        }
        Ok(())
    }
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> FromStr for SimplexTree<V, F, D> {
    type Err = SimplexTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextReader::default().read(s.as_bytes())
    }
}

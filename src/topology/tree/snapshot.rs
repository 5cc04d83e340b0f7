//! Serde support: a tree serializes as its records in trie pre-order.
//!
//! Payloads are not part of the snapshot; a deserialized tree has default
//! payloads. Pre-order lists every prefix before its extensions, so replaying
//! the records with plain insertion rebuilds the same trie even when the
//! stored filtration is not monotone.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::simplex_tree::SimplexTree;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::simplex::FilteredSimplex;

impl<V, F, D> Serialize for SimplexTree<V, F, D>
where
    V: VertexLike + Serialize,
    F: FiltrationLike + Serialize,
    D: PayloadLike,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.complex_simplex_range().map(|sh| self.filtered_simplex(sh)))
    }
}

impl<'de, V, F, D> Deserialize<'de> for SimplexTree<V, F, D>
where
    V: VertexLike + Deserialize<'de>,
    F: FiltrationLike + Deserialize<'de>,
    D: PayloadLike,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let records = Vec::<FilteredSimplex<V, F>>::deserialize(deserializer)?;
        let null = V::null_vertex();
        if let Some(pos) = records.iter().position(|r| r.vertices.contains(&null)) {
            return Err(De::Error::custom(format!("record {pos}: vertex {null} is reserved")));
        }
        Ok(Self::from_simplices(records))
    }
}

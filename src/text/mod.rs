//! Text model: name segmentation and the static character pools.

pub mod grapheme;
pub mod pools;

pub use grapheme::{
    join, segment, segment_graphemes, segment_with, unit_len, GraphemeSequence, Segmentation,
};
pub use pools::{get_pool, CharacterPool, Pool, PoolSelection};

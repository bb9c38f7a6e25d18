pub mod chord_transpose;
pub mod key_distance;

pub use chord_transpose::{
    transpose_chart, transpose_chord, transpose_chord_between_keys, transpose_chord_line,
};
pub use key_distance::semitones_between_keys;

pub mod signature;
pub mod sub_beat;
pub mod tempo;

pub use self::signature::Signature;
pub use self::sub_beat::{SubBeat, SubBeatGrid, SUBDIVISIONS};
pub use self::tempo::Tempo;

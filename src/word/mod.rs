/// Word encoding, rotations and move-slot arithmetic
pub mod alphabet;
/// Rotation orbits of all words
pub mod orbit;

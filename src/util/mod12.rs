use num_integer::Integer;

/// The pitch class of a chromatic index, counted from C. Negative indices wrap around, so one
/// semitone below C is 11, not -1.
pub fn pitch_class(index: i32) -> usize {
    index.mod_floor(&12) as usize
}

/// Split a chromatic index relative to C4 into the octave number and the pitch class.
pub fn split_octave(index: i32) -> (i32, usize) {
    let (octaves, class) = index.div_mod_floor(&12);
    (4 + octaves, class as usize)
}

pub fn add_mod12(l: usize, r: usize) -> usize {
    (l % 12 + r % 12) % 12
}

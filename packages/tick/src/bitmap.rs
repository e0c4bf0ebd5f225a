// Tick Bitmap
//
// One bit per spacing-compressed tick, 128 ticks per storage word.

use conxian_math::TICKS_PER_WORD;
use soroban_sdk::Env;

/// Compress a tick by its spacing, rounding toward negative infinity
#[inline]
pub fn compress(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing)
}

#[inline]
fn position(compressed: i32) -> (i32, u32) {
    (
        compressed.div_euclid(TICKS_PER_WORD),
        compressed.rem_euclid(TICKS_PER_WORD) as u32,
    )
}

/// Toggle the initialized bit of an aligned tick
pub fn flip_tick(
    env: &Env,
    read_word: impl Fn(&Env, i32) -> u128,
    write_word: impl Fn(&Env, i32, u128),
    tick: i32,
    tick_spacing: i32,
) {
    let (word_pos, bit_pos) = position(compress(tick, tick_spacing));
    let word = read_word(env, word_pos);
    write_word(env, word_pos, word ^ (1u128 << bit_pos));
}

/// Next initialized tick in the same bitmap word as `tick`
///
/// Searching down (`lte`) includes `tick` itself; searching up starts just
/// above it. When nothing is set in the word, returns the word boundary with
/// `false` so the caller can step there and continue.
pub fn next_initialized_tick_within_one_word(
    env: &Env,
    read_word: impl Fn(&Env, i32) -> u128,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> (i32, bool) {
    let compressed = compress(tick, tick_spacing);

    if lte {
        let (word_pos, bit_pos) = position(compressed);
        // Bits at or below bit_pos
        let mask = if bit_pos == 127 { u128::MAX } else { (1u128 << (bit_pos + 1)) - 1 };
        let masked = read_word(env, word_pos) & mask;

        if masked != 0 {
            let msb = 127 - masked.leading_zeros() as i32;
            ((word_pos * TICKS_PER_WORD + msb) * tick_spacing, true)
        } else {
            (word_pos * TICKS_PER_WORD * tick_spacing, false)
        }
    } else {
        let (word_pos, bit_pos) = position(compressed + 1);
        // Bits at or above bit_pos
        let mask = !((1u128 << bit_pos) - 1);
        let masked = read_word(env, word_pos) & mask;

        if masked != 0 {
            let lsb = masked.trailing_zeros() as i32;
            ((word_pos * TICKS_PER_WORD + lsb) * tick_spacing, true)
        } else {
            ((word_pos * TICKS_PER_WORD + TICKS_PER_WORD - 1) * tick_spacing, false)
        }
    }
}

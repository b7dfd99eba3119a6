/// Bits in one limb of the magnitude.
pub const LIMB_BITS: u32 = u32::BITS;

/// The decimal parser emits the magnitude sixteen bits at a time.
pub const HALF_LIMB_BITS: u32 = LIMB_BITS / 2;

pub const LIMB_BASE: u64 = 1 << LIMB_BITS;

/// Largest run of decimal digits whose value, times `2^16`, still fits in `u64`
/// together with the chunk below it.
pub const DECIMAL_CHUNK_DIGITS: usize = 9;

/// Values in `-MAX_CONSTANT..=MAX_CONSTANT` are served from the cache.
pub const MAX_CONSTANT: usize = 16;

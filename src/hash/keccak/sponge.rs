//! Sponge construction over Keccak-f[1600].
//!
//! The 1600-bit state is split into a `rate` part, into which input blocks
//! are XORed and from which output is read, and a `capacity` part that is
//! only touched by the permutation. `rate + capacity = 1600` always.
//!
//! Two entry points are provided:
//! - [`absorb`] / [`squeeze`], the one-shot functions used by the XOF layer
//! - [`Sponge`], a streaming absorber for inputs that do not fit in memory
//!
//! ## Padding
//!
//! Padding is the multi-rate pad10*1 rule in its byte-oriented form. The
//! caller supplies a `domain` byte holding the domain-separation suffix bits
//! followed by the first `1` of the padding (`0x06` for SHA-3, `0x1F` for
//! SHAKE, `0x04` for cSHAKE). The domain byte is placed right after the
//! message and the final `1` (`0x80`) at the end of the block, both XORed so
//! that they merge into one byte when a single byte is left. Padding is never
//! skipped: a message that already fills its last block gets a whole extra
//! block.

use super::computations::permute;

/// The 25 lanes of a Keccak-f[1600] state.
pub type SpongeState = [u64; 25];

/// Width of the permutation in bytes.
const STATE_BYTES: usize = 200;

/// XORs one rate-sized block into the leading lanes of the state.
///
/// Bytes are loaded into lanes in little-endian order, as FIPS 202
/// requires.
#[inline(always)]
fn xor_block(state: &mut SpongeState, block: &[u8]) {
    for (lane, chunk) in state.iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= u64::from_le_bytes(chunk.try_into().unwrap());
    }
}

/// Incremental sponge absorber.
///
/// Input is buffered until a full rate block is available, at which point the
/// block is XORed into the state and the permutation applied. [`Sponge::finalize`]
/// pads the remaining bytes and returns the state ready for [`squeeze`].
#[derive(Clone)]
pub struct Sponge {
    state: SpongeState,
    buffer: [u8; STATE_BYTES],
    filled: usize,
    rate: usize,
}

impl Sponge {
    /// Creates an empty sponge with the given capacity in bits.
    ///
    /// # Panics
    /// Panics if the resulting rate is zero or not a whole number of lanes.
    pub fn new(capacity_bits: usize) -> Self {
        assert!(capacity_bits < 1600, "capacity must leave a non-empty rate");

        let rate_bits = 1600 - capacity_bits;
        assert!(rate_bits % 64 == 0, "rate must be a whole number of lanes");

        Self {
            state: [0u64; 25],
            buffer: [0u8; STATE_BYTES],
            filled: 0,
            rate: rate_bits / 8,
        }
    }

    /// Rate of this sponge in bytes.
    pub fn rate_bytes(&self) -> usize {
        self.rate
    }

    /// Absorbs more input.
    pub fn update(&mut self, mut data: &[u8]) -> &mut Self {
        // Top up a partially filled block first.
        if self.filled > 0 {
            let take = (self.rate - self.filled).min(data.len());
            self.buffer[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < self.rate {
                return self;
            }

            xor_block(&mut self.state, &self.buffer[..self.rate]);
            permute(&mut self.state);
            self.filled = 0;
        }

        let mut blocks = data.chunks_exact(self.rate);
        for block in blocks.by_ref() {
            xor_block(&mut self.state, block);
            permute(&mut self.state);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();

        self
    }

    /// Pads the buffered input with `domain ‖ 0* ‖ 0x80` and absorbs the
    /// final block.
    pub fn finalize(&mut self, domain: u8) -> SpongeState {
        let rate = self.rate;

        self.buffer[self.filled..rate].fill(0);
        self.buffer[self.filled] ^= domain;
        self.buffer[rate - 1] ^= 0x80;

        xor_block(&mut self.state, &self.buffer[..rate]);
        permute(&mut self.state);

        let state = self.state;

        self.buffer.fill(0);
        self.state = [0u64; 25];
        self.filled = 0;

        state
    }
}

/// Absorbs `message` into a fresh state.
///
/// # Parameters
/// - `message`: arbitrary-length input
/// - `capacity_bits`: sponge capacity, `rate = 1600 - capacity_bits`
/// - `domain`: domain-separation byte that opens the padding
///
/// # Returns
/// The state after the last padded block has been permuted.
pub fn absorb(message: &[u8], capacity_bits: usize, domain: u8) -> SpongeState {
    Sponge::new(capacity_bits).update(message).finalize(domain)
}

/// Squeezes `output_bits` bits out of `state`.
///
/// Each pass emits the first `rate_bits / 64` lanes of the state in
/// little-endian byte order; the permutation is applied between passes until
/// enough output is available, which is then truncated to exactly
/// `output_bits / 8` bytes.
///
/// # Panics
/// Panics if `output_bits` is not a multiple of 8 or `rate_bits` is not a
/// non-zero multiple of 64 below 1600.
pub fn squeeze(state: &mut SpongeState, output_bits: usize, rate_bits: usize) -> Vec<u8> {
    assert!(output_bits % 8 == 0, "output length must be a whole number of bytes");
    assert!(
        rate_bits > 0 && rate_bits < 1600 && rate_bits % 64 == 0,
        "rate must be a whole number of lanes"
    );

    let out_len = output_bits / 8;
    let lanes = rate_bits / 64;
    let mut out = Vec::with_capacity(out_len + rate_bits / 8);

    while out.len() < out_len {
        if !out.is_empty() {
            permute(state);
        }

        for lane in &state[..lanes] {
            out.extend_from_slice(&lane.to_le_bytes());
        }
    }

    out.truncate(out_len);
    out
}

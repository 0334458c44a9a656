use super::{PILN, RC, ROTC};

#[cfg(not(feature = "speed"))]
use super::ROUNDS;

#[inline(always)]
fn theta(state: &mut [u64; 25]) {
    let mut c = [0u64; 5];

    for (x, column) in c.iter_mut().enumerate() {
        *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);

        for y in (0..25).step_by(5) {
            state[y + x] ^= d;
        }
    }
}

#[inline(always)]
fn rho_pi(state: &mut [u64; 25]) {
    let mut carried = state[1];

    for (&dest, &rot) in PILN.iter().zip(ROTC.iter()) {
        let next = state[dest];
        state[dest] = carried.rotate_left(rot);
        carried = next;
    }
}

#[inline(always)]
fn chi(state: &mut [u64; 25]) {
    for y in (0..25).step_by(5) {
        let row = [
            state[y],
            state[y + 1],
            state[y + 2],
            state[y + 3],
            state[y + 4],
        ];

        for x in 0..5 {
            state[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn round(state: &mut [u64; 25], rc: u64) {
    theta(state);
    rho_pi(state);
    chi(state);

    // iota
    state[0] ^= rc;
}

/// Applies the Keccak-f[1600] permutation to `state` in place.
///
/// Lanes are indexed `x + 5y`. Each of the 24 rounds runs theta, rho and pi
/// (fused), chi and iota. The function is total and branch-free with respect
/// to the state contents.
#[cfg(not(feature = "speed"))]
pub fn permute(state: &mut [u64; 25]) {
    for &rc in RC.iter().take(ROUNDS) {
        round(state, rc);
    }
}

/// Applies the Keccak-f[1600] permutation to `state` in place.
///
/// Unrolled schedule selected by the `speed` feature. Output is identical
/// to the looped version.
#[cfg(feature = "speed")]
pub fn permute(state: &mut [u64; 25]) {
    macro_rules! R {
        ($i:expr) => {
            round(state, RC[$i])
        };
    }

    R!(0);
    R!(1);
    R!(2);
    R!(3);
    R!(4);
    R!(5);
    R!(6);
    R!(7);

    R!(8);
    R!(9);
    R!(10);
    R!(11);
    R!(12);
    R!(13);
    R!(14);
    R!(15);

    R!(16);
    R!(17);
    R!(18);
    R!(19);
    R!(20);
    R!(21);
    R!(22);
    R!(23);
}

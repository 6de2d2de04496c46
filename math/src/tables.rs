//! Logarithm and exponent tables for GF(2^8).
//!
//! The field is GF(2)[x] / (x^8 + x^4 + x^3 + x + 1), the AES field. Both
//! tables are generated at compile time from the reduction polynomial and
//! the generator `0x03`, so they live in read-only memory for the whole
//! program and are never mutated.

/// Irreducible polynomial x^8 + x^4 + x^3 + x + 1.
pub const REDUCTION_POLYNOMIAL: u16 = 0x11b;

/// Primitive element used to enumerate the multiplicative group.
pub const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group GF(2^8)*.
pub const GROUP_ORDER: u16 = 255;

/// Carry-less multiplication reduced by [`REDUCTION_POLYNOMIAL`].
///
/// Only used to build the tables and as a reference in tests; it branches
/// on operand bits and must not see secret data at runtime.
pub(crate) const fn carryless_mul(mut a: u8, mut b: u8) -> u8 {
    let reduction = (REDUCTION_POLYNOMIAL & 0xff) as u8;
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= reduction;
        }
        b >>= 1;
    }
    product
}

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut value = 1u8;
    let mut i = 0;
    while i < GROUP_ORDER as usize {
        table[i] = value;
        value = carryless_mul(value, GENERATOR);
        i += 1;
    }
    // generator^255 == generator^0
    table[GROUP_ORDER as usize] = table[0];
    table
}

const fn build_log_table(exp: &[u8; 256]) -> [u8; 256] {
    // log[0] stays 0; it is never meaningful and callers mask the result.
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < GROUP_ORDER as usize {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const EXP_TABLE: [u8; 256] = build_exp_table();
const LOG_TABLE: [u8; 256] = build_log_table(&EXP_TABLE);

/// `EXP[i]` = generator^i, indices taken modulo 255.
pub(crate) static EXP: [u8; 256] = EXP_TABLE;

/// `LOG[x]` = discrete logarithm of `x` base the generator.
pub(crate) static LOG: [u8; 256] = LOG_TABLE;

//! Checksum and keyed-hash routines behind the 32/64-bit registry entries

use crc::{CRC_32_ISCSI, CRC_32_ISO_HDLC, Crc};
use siphasher::sip::SipHasher24;
use std::hash::Hasher;

const ADLER_MOD: u32 = 65521;
/// Largest block that cannot overflow the u32 sums before reduction
const ADLER_NMAX: usize = 5552;

/// CRC-32 (IEEE 802.3, zlib/PNG)
pub const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
/// CRC-32C (Castagnoli, iSCSI)
pub const CRC32C: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

/// Fixed SipHash key `00 01 02 .. 0f`, read as two little-endian words
pub const SIPHASH_KEY: (u64, u64) = (0x0706050403020100, 0x0f0e0d0c0b0a0908);

pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for chunk in data.chunks(ADLER_NMAX) {
        for byte in chunk {
            a += u32::from(*byte);
            b += a;
        }
        a %= ADLER_MOD;
        b %= ADLER_MOD;
    }

    (b << 16) | a
}

pub fn crc32(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

pub fn crc32c(data: &[u8]) -> u32 {
    CRC32C.checksum(data)
}

pub fn siphash24(data: &[u8]) -> u64 {
    let mut hasher = SipHasher24::new_with_keys(SIPHASH_KEY.0, SIPHASH_KEY.1);
    hasher.write(data);
    hasher.finish()
}

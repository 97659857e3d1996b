// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Endian codec
//!
//! Reads and writes 16/32/64-bit integers at a byte offset of a buffer in an
//! explicit byte order. Results never depend on the host byte order.
//!
//! Every function is a `const fn` so the hash engine can use the codec in
//! `const` contexts. Out-of-range offsets panic, exactly like slice indexing.

/// Byte order of a multi-byte integer in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network order, SHA-2 word order)
    Big,
    /// Least significant byte first
    Little,
}

impl ByteOrder {
    /// Byte order of the compilation target.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// True if this order differs from the target's native order.
    pub const fn needs_swap(self) -> bool {
        !matches!(
            (self, Self::NATIVE),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }
}

/// Reverse the bytes of a `u16`.
pub const fn bswap16(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverse the bytes of a `u32`.
pub const fn bswap32(value: u32) -> u32 {
    value.swap_bytes()
}

/// Reverse the bytes of a `u64`.
pub const fn bswap64(value: u64) -> u64 {
    value.swap_bytes()
}

const fn read_bytes<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = buf[offset + i];
        i += 1;
    }
    out
}

const fn write_bytes<const N: usize>(buf: &mut [u8], offset: usize, bytes: [u8; N]) {
    let mut i = 0;
    while i < N {
        buf[offset + i] = bytes[i];
        i += 1;
    }
}

/// Load a big-endian `u16` from `buf[offset..offset + 2]`.
pub const fn load_be16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes(read_bytes(buf, offset))
}

/// Load a big-endian `u32` from `buf[offset..offset + 4]`.
pub const fn load_be32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(read_bytes(buf, offset))
}

/// Load a big-endian `u64` from `buf[offset..offset + 8]`.
pub const fn load_be64(buf: &[u8], offset: usize) -> u64 {
    u64::from_be_bytes(read_bytes(buf, offset))
}

/// Load a little-endian `u16` from `buf[offset..offset + 2]`.
pub const fn load_le16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(read_bytes(buf, offset))
}

/// Load a little-endian `u32` from `buf[offset..offset + 4]`.
pub const fn load_le32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(read_bytes(buf, offset))
}

/// Load a little-endian `u64` from `buf[offset..offset + 8]`.
pub const fn load_le64(buf: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(read_bytes(buf, offset))
}

/// Store `value` big-endian into `buf[offset..offset + 2]`.
pub const fn store_be16(buf: &mut [u8], offset: usize, value: u16) {
    write_bytes(buf, offset, value.to_be_bytes());
}

/// Store `value` big-endian into `buf[offset..offset + 4]`.
pub const fn store_be32(buf: &mut [u8], offset: usize, value: u32) {
    write_bytes(buf, offset, value.to_be_bytes());
}

/// Store `value` big-endian into `buf[offset..offset + 8]`.
pub const fn store_be64(buf: &mut [u8], offset: usize, value: u64) {
    write_bytes(buf, offset, value.to_be_bytes());
}

/// Store `value` little-endian into `buf[offset..offset + 2]`.
pub const fn store_le16(buf: &mut [u8], offset: usize, value: u16) {
    write_bytes(buf, offset, value.to_le_bytes());
}

/// Store `value` little-endian into `buf[offset..offset + 4]`.
pub const fn store_le32(buf: &mut [u8], offset: usize, value: u32) {
    write_bytes(buf, offset, value.to_le_bytes());
}

/// Store `value` little-endian into `buf[offset..offset + 8]`.
pub const fn store_le64(buf: &mut [u8], offset: usize, value: u64) {
    write_bytes(buf, offset, value.to_le_bytes());
}

/// Load a `u16` in the given byte order.
pub const fn load_u16(order: ByteOrder, buf: &[u8], offset: usize) -> u16 {
    match order {
        ByteOrder::Big => load_be16(buf, offset),
        ByteOrder::Little => load_le16(buf, offset),
    }
}

/// Load a `u32` in the given byte order.
pub const fn load_u32(order: ByteOrder, buf: &[u8], offset: usize) -> u32 {
    match order {
        ByteOrder::Big => load_be32(buf, offset),
        ByteOrder::Little => load_le32(buf, offset),
    }
}

/// Load a `u64` in the given byte order.
pub const fn load_u64(order: ByteOrder, buf: &[u8], offset: usize) -> u64 {
    match order {
        ByteOrder::Big => load_be64(buf, offset),
        ByteOrder::Little => load_le64(buf, offset),
    }
}

/// Store a `u16` in the given byte order.
pub const fn store_u16(order: ByteOrder, buf: &mut [u8], offset: usize, value: u16) {
    match order {
        ByteOrder::Big => store_be16(buf, offset, value),
        ByteOrder::Little => store_le16(buf, offset, value),
    }
}

/// Store a `u32` in the given byte order.
pub const fn store_u32(order: ByteOrder, buf: &mut [u8], offset: usize, value: u32) {
    match order {
        ByteOrder::Big => store_be32(buf, offset, value),
        ByteOrder::Little => store_le32(buf, offset, value),
    }
}

/// Store a `u64` in the given byte order.
pub const fn store_u64(order: ByteOrder, buf: &mut [u8], offset: usize, value: u64) {
    match order {
        ByteOrder::Big => store_be64(buf, offset, value),
        ByteOrder::Little => store_le64(buf, offset, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_be_is_host_independent() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(load_be16(&buf, 0), 0x0102);
        assert_eq!(load_be32(&buf, 0), 0x0102_0304);
        assert_eq!(load_be32(&buf, 4), 0x0506_0708);
        assert_eq!(load_be64(&buf, 0), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_load_le() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(load_le16(&buf, 1), 0x0302);
        assert_eq!(load_le32(&buf, 0), 0x0403_0201);
        assert_eq!(load_le64(&buf, 0), 0x0807_0605_0403_0201);
    }

    #[test]
    fn test_store_at_offset() {
        let mut buf = [0u8; 12];
        store_be32(&mut buf, 1, 0xdead_beef);
        assert_eq!(&buf[..6], &[0x00, 0xde, 0xad, 0xbe, 0xef, 0x00]);

        store_le16(&mut buf, 6, 0xabcd);
        assert_eq!(&buf[6..8], &[0xcd, 0xab]);

        let mut wide = [0u8; 8];
        store_be64(&mut wide, 0, 448);
        assert_eq!(wide, [0, 0, 0, 0, 0, 0, 0x01, 0xc0]);
    }

    #[test]
    fn test_byte_order_dispatch() {
        let mut buf = [0u8; 8];
        store_u32(ByteOrder::Little, &mut buf, 0, 0x1122_3344);
        store_u32(ByteOrder::Big, &mut buf, 4, 0x1122_3344);
        assert_eq!(buf, [0x44, 0x33, 0x22, 0x11, 0x11, 0x22, 0x33, 0x44]);
        assert_eq!(load_u32(ByteOrder::Little, &buf, 0), 0x1122_3344);
        assert_eq!(load_u32(ByteOrder::Big, &buf, 4), 0x1122_3344);

        store_u64(ByteOrder::Big, &mut buf, 0, 7);
        assert_eq!(load_u64(ByteOrder::Big, &buf, 0), 7);
        store_u16(ByteOrder::Little, &mut buf, 0, 0x0102);
        assert_eq!(load_u16(ByteOrder::Little, &buf, 0), 0x0102);
    }

    #[test]
    fn test_bswap_matches_order_conversion() {
        assert_eq!(bswap16(0x0102), 0x0201);
        assert_eq!(bswap32(0x0102_0304), 0x0403_0201);
        assert_eq!(bswap64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);

        let buf = 0x0102_0304u32.to_ne_bytes();
        let native = u32::from_ne_bytes(buf);
        let swapped = if ByteOrder::Big.needs_swap() {
            bswap32(native)
        } else {
            native
        };
        assert_eq!(swapped, load_be32(&buf, 0));
    }

    #[test]
    fn test_codec_in_const_context() {
        const WORD: u32 = load_be32(b"abcd", 0);
        const STORED: [u8; 4] = {
            let mut buf = [0u8; 4];
            store_be32(&mut buf, 0, 0x6162_6364);
            buf
        };
        assert_eq!(WORD, 0x6162_6364);
        assert_eq!(&STORED, b"abcd");
    }

    #[test]
    #[should_panic]
    fn test_load_out_of_bounds_panics() {
        let buf = [0u8; 3];
        let _ = load_be32(&buf, 0);
    }
}

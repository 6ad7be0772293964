use thiserror::Error;

/// The z-base-32 alphabet: 32 visually unambiguous lowercase characters.
pub const ZBASE32_ALPHABET: [u8; 32] = *b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Longest hex input [`hex64_to_base32z`] accepts (a 32-byte public key).
pub const HEX_INPUT_MAX: usize = 64;

/// Destination capacity used by the hex adapter.
const DEST_CAPACITY: usize = 64;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Caller contract violation: the adapter only handles fixed-length keys.
    #[error("hex input is {len} characters, limit is {limit}")]
    InputTooLong { len: usize, limit: usize },

    /// The encoded form would not fit the destination; nothing was written.
    #[error("encoding needs {needed} characters, destination holds {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },
}

/// Encode `input` into z-base-32, writing characters into `dest`.
///
/// Consumes 5 bits per output character, most significant bits first; the
/// final partial group is padded on the right with zero bits. Returns the
/// number of characters written.
///
/// The destination slice length is the capacity: if the encoding would not
/// fit, the call fails with [`EncodeError::CapacityExceeded`] before
/// touching `dest`. Empty input encodes to zero characters.
pub fn base32z_encode(input: &[u8], dest: &mut [u8]) -> Result<usize, EncodeError> {
    if input.is_empty() {
        return Ok(0);
    }

    let needed = (input.len() * 8).div_ceil(5);
    if needed > dest.len() {
        return Err(EncodeError::CapacityExceeded {
            needed,
            capacity: dest.len(),
        });
    }

    let mut acc = u32::from(input[0]);
    let mut bits = 8u32;
    let mut pos = 1usize;
    let mut out = 0usize;

    while bits > 0 || pos < input.len() {
        if bits < 5 {
            if pos < input.len() {
                acc = (acc << 8) | u32::from(input[pos]);
                pos += 1;
                bits += 8;
            } else {
                // Last byte: pad the tail group with zero bits.
                acc <<= 5 - bits;
                bits = 5;
            }
        }

        bits -= 5;
        dest[out] = ZBASE32_ALPHABET[((acc >> bits) & 0x1F) as usize];
        out += 1;
    }

    Ok(out)
}

/// Decode one hex digit to its nibble value.
///
/// Any byte outside `0-9a-fA-F` maps to 0. The key-display path this
/// serves has always decoded leniently; keep that behavior.
fn hex_nibble(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'A'..=b'F' => ch - b'A' + 10,
        b'a'..=b'f' => ch - b'a' + 10,
        _ => 0,
    }
}

/// Convert a hex string of at most [`HEX_INPUT_MAX`] characters (a
/// fixed-length public key) to its z-base-32 form.
///
/// Hex digits are case-insensitive and decoded leniently (non-hex bytes
/// count as `0`). Nibbles are packed two per byte, high nibble first; an
/// odd trailing nibble occupies the high half of the final byte. 64 hex
/// characters become 32 bytes and encode to 52 characters.
pub fn hex64_to_base32z(src: &str) -> Result<String, EncodeError> {
    if src.len() > HEX_INPUT_MAX {
        return Err(EncodeError::InputTooLong {
            len: src.len(),
            limit: HEX_INPUT_MAX,
        });
    }

    let mut bin = [0u8; HEX_INPUT_MAX / 2];
    let mut len = 0usize;
    for (i, ch) in src.bytes().enumerate() {
        let nib = hex_nibble(ch);
        if i % 2 == 0 {
            bin[i / 2] = nib << 4;
            len = i / 2 + 1;
        } else {
            bin[i / 2] |= nib;
        }
    }

    let mut buf = [0u8; DEST_CAPACITY];
    let written = base32z_encode(&bin[..len], &mut buf)?;

    // The alphabet is pure ASCII, so this cannot produce invalid UTF-8.
    Ok(buf[..written].iter().map(|&b| b as char).collect())
}

mod encoder {
    use crate::core::base32z::{base32z_encode, EncodeError, ZBASE32_ALPHABET};

    #[test]
    fn known_vectors() {
        // 0xFF = 11111 111(00) -> indices 31, 28 -> "9h"
        let mut buf = [0u8; 8];
        let n = base32z_encode(&[0xFF], &mut buf).unwrap();
        assert_eq!(&buf[..n], b"9h");

        // 0x0F = 00001 111(00) -> indices 1, 28 -> "bh"
        let n = base32z_encode(&[0x0F], &mut buf).unwrap();
        assert_eq!(&buf[..n], b"bh");

        // 0x00 -> indices 0, 0 -> "yy"
        let n = base32z_encode(&[0x00], &mut buf).unwrap();
        assert_eq!(&buf[..n], b"yy");
    }

    #[test]
    fn output_length_is_ceil_of_bits_over_five() {
        let mut buf = [0u8; 64];
        for len in 1..=32usize {
            let input = vec![0xA5u8; len];
            let n = base32z_encode(&input, &mut buf).unwrap();
            let want = (len * 8).div_ceil(5);
            println!("{len} bytes -> {n} chars (want {want})");
            assert_eq!(n, want);
        }
    }

    #[test]
    fn only_alphabet_characters_are_emitted() {
        let input: Vec<u8> = (0u8..=255).collect();
        let mut buf = [0u8; 512];
        let n = base32z_encode(&input, &mut buf).unwrap();
        for &ch in &buf[..n] {
            assert!(
                ZBASE32_ALPHABET.contains(&ch),
                "non-alphabet byte 0x{ch:02X} in output"
            );
        }
    }

    #[test]
    fn capacity_exceeded_reports_error_and_writes_nothing() {
        let mut buf = [b'#'; 4];
        let err = base32z_encode(&[0u8; 8], &mut buf).unwrap_err();
        assert_eq!(
            err,
            EncodeError::CapacityExceeded {
                needed: 13,
                capacity: 4
            }
        );
        // Failure must not touch the destination.
        assert_eq!(buf, [b'#'; 4]);
    }

    #[test]
    fn empty_input_encodes_to_nothing() {
        let mut buf = [0u8; 4];
        assert_eq!(base32z_encode(&[], &mut buf), Ok(0));
    }
}

mod adapter {
    use crate::core::base32z::{hex64_to_base32z, EncodeError, ZBASE32_ALPHABET, HEX_INPUT_MAX};

    #[test]
    fn all_zero_key_is_all_y() {
        let src = "0".repeat(64);
        let out = hex64_to_base32z(&src).unwrap();
        println!("zeros -> {out}");

        // 64 hex chars pack to 32 bytes; 256 bits / 5 rounds up to 52.
        assert_eq!(out.len(), 52);
        assert!(out.bytes().all(|b| b == b'y'));
    }

    #[test]
    fn deterministic_across_calls() {
        let src = "4a1f00cc9e2b7d3855e6f1908ab2c4d64a1f00cc9e2b7d3855e6f1908ab2c4d6";
        let first = hex64_to_base32z(src).unwrap();
        for _ in 0..8 {
            assert_eq!(hex64_to_base32z(src).unwrap(), first);
        }
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        assert_eq!(
            hex64_to_base32z("aB").unwrap(),
            hex64_to_base32z("Ab").unwrap()
        );
        assert_eq!(
            hex64_to_base32z("DEADBEEF").unwrap(),
            hex64_to_base32z("deadbeef").unwrap()
        );
    }

    #[test]
    fn non_hex_bytes_decode_as_zero() {
        // Lenient decode: 'z' and '!' count as nibble 0.
        assert_eq!(
            hex64_to_base32z("z!").unwrap(),
            hex64_to_base32z("00").unwrap()
        );
    }

    #[test]
    fn over_length_input_is_a_reported_error() {
        let src = "0".repeat(HEX_INPUT_MAX + 1);
        let err = hex64_to_base32z(&src).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InputTooLong {
                len: 65,
                limit: HEX_INPUT_MAX
            }
        );
    }

    #[test]
    fn output_uses_only_the_alphabet() {
        let src = "ffeeddccbbaa99887766554433221100ffeeddccbbaa99887766554433221100";
        let out = hex64_to_base32z(src).unwrap();
        assert_eq!(out.len(), 52);
        for b in out.bytes() {
            assert!(ZBASE32_ALPHABET.contains(&b));
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(hex64_to_base32z("").unwrap(), "");
    }

    #[test]
    fn single_hex_digit_packs_into_high_nibble() {
        // "f" -> byte 0xF0 -> 11110 000 -> indices 30, 0 -> "6y"
        assert_eq!(hex64_to_base32z("f").unwrap(), "6y");
    }
}

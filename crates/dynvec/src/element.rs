//! Fixed-width element codecs for the typed façade.

/// A value that can occupy one fixed-width slot of the erased core.
///
/// Implementations define a byte width known at compile time and a
/// lossless native-endian codec between the value and a slot of that
/// width. The façade uses this to box a typed value into slot bytes
/// before calling the core, and to unbox slot bytes handed back by it.
pub trait Element: Copy {
    /// Byte width of one encoded value.
    const WIDTH: usize;

    /// Encode `self` into `out`, which is exactly [`WIDTH`](Self::WIDTH)
    /// bytes.
    fn write_to(&self, out: &mut [u8]);

    /// Decode a value from `bytes`, which is exactly
    /// [`WIDTH`](Self::WIDTH) bytes.
    fn read_from(bytes: &[u8]) -> Self;
}

macro_rules! impl_element_for_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn write_to(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn read_from(bytes: &[u8]) -> Self {
                    <$ty>::from_ne_bytes(bytes.try_into().expect("slot width mismatch"))
                }
            }
        )*
    };
}

impl_element_for_numeric!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl Element for bool {
    const WIDTH: usize = 1;

    fn write_to(&self, out: &mut [u8]) {
        out[0] = u8::from(*self);
    }

    fn read_from(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

impl Element for char {
    const WIDTH: usize = 4;

    fn write_to(&self, out: &mut [u8]) {
        out.copy_from_slice(&u32::from(*self).to_ne_bytes());
    }

    /// Decodes the replacement character for byte patterns that are not
    /// a valid scalar value, rather than panicking on corrupted slots.
    fn read_from(bytes: &[u8]) -> Self {
        char::from_u32(u32::read_from(bytes)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: Element + PartialEq + std::fmt::Debug>(value: T) {
        let mut slot = vec![0u8; T::WIDTH];
        value.write_to(&mut slot);
        assert_eq!(T::read_from(&slot), value);
    }

    #[test]
    fn numeric_codecs_round_trip() {
        round_trip(-42i32);
        round_trip(u64::MAX);
        round_trip(960.4f32);
        round_trip(f64::MIN_POSITIVE);
        round_trip(i128::MIN);
    }

    #[test]
    fn bool_and_char_round_trip() {
        round_trip(true);
        round_trip(false);
        round_trip('µ');
        round_trip('𝕍');
    }

    #[test]
    fn invalid_char_bytes_decode_to_replacement() {
        let slot = 0xD800u32.to_ne_bytes();
        assert_eq!(char::read_from(&slot), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn widths_match_memory_layout() {
        assert_eq!(<i32 as Element>::WIDTH, 4);
        assert_eq!(<f64 as Element>::WIDTH, 8);
        assert_eq!(<bool as Element>::WIDTH, 1);
        assert_eq!(<char as Element>::WIDTH, 4);
    }
}

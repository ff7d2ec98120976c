//! fixed-point numerical types

/// The number of fractional bits in every fixed-point field of the format.
const FRACT_BITS: u32 = 4;

/// The factor between a real value and its fixed-point representation.
pub const FIXED_POINT_SCALE: f64 = (1 << FRACT_BITS) as f64;

// shared between Fixed12Dot4 and UFixed12Dot4
macro_rules! fixed_impl {
    ($name:ident, $ty:ty, $kind:literal) => {
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[doc = concat!("16-bit ", $kind, " fixed point number with 4 bits of fraction.")]
        pub struct $name($ty);

        impl $name {
            /// Minimum value.
            pub const MIN: Self = Self(<$ty>::MIN);

            /// Maximum value.
            pub const MAX: Self = Self(<$ty>::MAX);

            /// This type's smallest representable value
            pub const EPSILON: Self = Self(1);

            /// Zero.
            pub const ZERO: Self = Self(0);

            const ONE: $ty = 1 << FRACT_BITS;

            /// Create a value from its raw bit representation.
            pub const fn from_bits(bits: $ty) -> Self {
                Self(bits)
            }

            /// The raw bit representation, i.e. the value multiplied by 16.
            pub const fn to_bits(self) -> $ty {
                self.0
            }

            /// Creates a fixed point value from an f64, rounding half-up.
            ///
            /// This is `floor(x * 16 + 0.5)`, the rounding the fctx
            /// compiler has always used. Returns `None` if the input is not
            /// finite or if the rounded value does not fit in 16 bits.
            pub fn checked_from_f64(x: f64) -> Option<Self> {
                let scaled = (x * FIXED_POINT_SCALE + 0.5).floor();
                if scaled.is_finite()
                    && scaled >= <$ty>::MIN as f64
                    && scaled <= <$ty>::MAX as f64
                {
                    Some(Self(scaled as $ty))
                } else {
                    None
                }
            }

            /// Returns the value as an f64.
            ///
            /// This operation is lossless.
            pub fn to_f64(self) -> f64 {
                self.0 as f64 / Self::ONE as f64
            }

            /// The little-endian encoding of this value.
            pub fn to_le_bytes(self) -> [u8; 2] {
                self.0.to_le_bytes()
            }
        }

        //hack: we can losslessly go to float, so use those fmt impls
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.to_f64().fmt(f)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.to_f64().fmt(f)
            }
        }
    };
}

fixed_impl!(Fixed12Dot4, i16, "signed");
fixed_impl!(UFixed12Dot4, u16, "unsigned");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed12dot4_floats() {
        assert_eq!(Fixed12Dot4(160), Fixed12Dot4::checked_from_f64(10.0).unwrap());
        assert_eq!(Fixed12Dot4(8), Fixed12Dot4::checked_from_f64(0.5).unwrap());
        assert_eq!(Fixed12Dot4(1), Fixed12Dot4::checked_from_f64(0.0625).unwrap());
        assert_eq!(Fixed12Dot4(-16), Fixed12Dot4::checked_from_f64(-1.0).unwrap());
        assert_eq!(Fixed12Dot4(0x7fff), Fixed12Dot4::checked_from_f64(2047.9375).unwrap());
        assert_eq!(Fixed12Dot4(-0x8000), Fixed12Dot4::checked_from_f64(-2048.0).unwrap());
    }

    #[test]
    fn rounds_half_up() {
        // 0.03125 is exactly half a step
        assert_eq!(Fixed12Dot4(1), Fixed12Dot4::checked_from_f64(0.03125).unwrap());
        assert_eq!(Fixed12Dot4(0), Fixed12Dot4::checked_from_f64(-0.03125).unwrap());
        assert_eq!(Fixed12Dot4(-32), Fixed12Dot4::checked_from_f64(-2.03125).unwrap());
        assert_eq!(Fixed12Dot4(33), Fixed12Dot4::checked_from_f64(2.03125).unwrap());
    }

    #[test]
    fn out_of_range() {
        assert!(Fixed12Dot4::checked_from_f64(2048.0).is_none());
        assert!(Fixed12Dot4::checked_from_f64(-2048.1).is_none());
        assert!(Fixed12Dot4::checked_from_f64(f64::NAN).is_none());
        assert!(Fixed12Dot4::checked_from_f64(f64::INFINITY).is_none());
        assert!(UFixed12Dot4::checked_from_f64(-0.5).is_none());
        assert!(UFixed12Dot4::checked_from_f64(4096.0).is_none());
        assert_eq!(
            UFixed12Dot4::MAX,
            UFixed12Dot4::checked_from_f64(4095.9375).unwrap()
        );
    }

    #[test]
    fn roundtrip_fixed12dot4() {
        for i in i16::MIN..=i16::MAX {
            let val = Fixed12Dot4(i);
            assert_eq!(Some(val), Fixed12Dot4::checked_from_f64(val.to_f64()));
        }
    }

    #[test]
    fn little_endian_bytes() {
        assert_eq!([0xa0, 0x00], Fixed12Dot4::from_bits(160).to_le_bytes());
        assert_eq!([0xf0, 0xff], Fixed12Dot4::from_bits(-16).to_le_bytes());
        assert_eq!([0x34, 0x12], UFixed12Dot4::from_bits(0x1234).to_le_bytes());
    }
}

//! Rust element types that can back a tensor

use super::DType;
use half::f16;

/// Trait for types that can be stored in a tensor field.
///
/// Elements are always stored little-endian, whatever the host byte order.
pub trait Element: Copy + Sized + 'static {
    const DTYPE: DType;

    /// Decode one element from exactly `DTYPE.element_size()` bytes
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Append the little-endian encoding of `self`
    fn extend_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }

                fn extend_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_element! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f16 => F16,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Element>(v: T) -> Vec<u8> {
        let mut out = Vec::new();
        v.extend_le(&mut out);
        out
    }

    #[test]
    fn sizes_agree_with_dtype() {
        assert_eq!(encode(1u8).len(), u8::DTYPE.element_size());
        assert_eq!(encode(1i16).len(), i16::DTYPE.element_size());
        assert_eq!(encode(f16::ONE).len(), f16::DTYPE.element_size());
        assert_eq!(encode(1u32).len(), u32::DTYPE.element_size());
        assert_eq!(encode(1.0f64).len(), f64::DTYPE.element_size());
    }

    #[test]
    fn little_endian_layout() {
        assert_eq!(encode(0x0201u16), vec![0x01, 0x02]);
        assert_eq!(encode(-2i32), vec![0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(u32::from_le_slice(&[0x01, 0x02, 0x03, 0x04]), 0x04030201);
    }

    #[test]
    fn half_precision() {
        let v = f16::from_f32(1.5);
        let bytes = encode(v);
        assert_eq!(f16::from_le_slice(&bytes), v);
        assert_eq!(f16::from_le_slice(&bytes).to_f32(), 1.5);
    }
}

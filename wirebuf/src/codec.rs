use crate::buffer::ByteBuffer;
use crate::error::BufferError;

pub trait Codec: Sized {
    fn encode(&self, buffer: &mut ByteBuffer) -> Result<(), BufferError>;
    fn decode(buffer: &mut ByteBuffer) -> Result<Self, BufferError>;
}

macro_rules! primitive_codec {
    ($type:ty, $read:ident, $write:ident) => {
        impl Codec for $type {
            fn encode(&self, buffer: &mut ByteBuffer) -> Result<(), BufferError> {
                buffer.$write(*self)
            }
            fn decode(buffer: &mut ByteBuffer) -> Result<Self, BufferError> {
                buffer.$read()
            }
        }
    };
}
primitive_codec!(bool, read_bool, write_bool);
primitive_codec!(i8, read_i8, write_i8);
// u8 goes through the shifted encoding, like the buffer methods it wraps.
primitive_codec!(u8, read_u8, write_u8);
primitive_codec!(i16, read_i16, write_i16);
primitive_codec!(i32, read_i32, write_i32);
primitive_codec!(i64, read_i64, write_i64);
primitive_codec!(f32, read_f32, write_f32);

impl Codec for String {
    fn encode(&self, buffer: &mut ByteBuffer) -> Result<(), BufferError> {
        buffer.write_string(self)
    }
    fn decode(buffer: &mut ByteBuffer) -> Result<Self, BufferError> {
        buffer.read_string()
    }
}

impl<T: Codec> Codec for Option<T> {
    fn encode(&self, buffer: &mut ByteBuffer) -> Result<(), BufferError> {
        match self {
            Some(value) => {
                true.encode(buffer)?;
                value.encode(buffer)
            }
            None => false.encode(buffer),
        }
    }
    fn decode(buffer: &mut ByteBuffer) -> Result<Self, BufferError> {
        let exists = bool::decode(buffer)?;
        if exists {
            let value = T::decode(buffer)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }
}

//! Structural identity for arbitrary elements
//!
//! `distinct` cannot assume `T: Eq + Hash`, so every element is reduced to a
//! canonical string instead. Two elements are duplicates when their
//! fingerprints are equal.
//!
//! The encoding is driven by the element's `Serialize` impl and is lossless:
//! every token is self-delimiting, floats keep their exact bit pattern and
//! `None`, `Some(None)` and `()` all encode differently.
//!
//! ```text
//! bool            T | F
//! integer         i<decimal>;           (all widths up to 128 bits)
//! float           d<16 hex digits>      (f64 bit pattern; f32 is widened)
//! char            c<len>:<utf8>
//! string          s<len>:<utf8>
//! bytes           x<len>:<hex>
//! unit            U
//! option          N | S<value>
//! enum variant    V<string><payload>    (payload omitted for unit variants)
//! seq, tuple      [<value>...]
//! map, struct     {<key><value>...}     (entries ordered by encoded key)
//! ```
//!
//! Newtype structs encode as their inner value and struct names are not
//! encoded, so the fingerprint is structural rather than nominal.

use serde::ser::{self, Serialize};
use std::fmt::{Display, Write};

use crate::error::StreamResult;

/// Computes a deduplication key for an element
pub trait Fingerprinter<T: ?Sized> {
    fn fingerprint(&self, item: &T) -> StreamResult<String>;
}

/// Default fingerprinter: the lossless canonical encoding of [`fingerprint`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalEncoding;

impl<T> Fingerprinter<T> for CanonicalEncoding
where
    T: Serialize + ?Sized,
{
    fn fingerprint(&self, item: &T) -> StreamResult<String> {
        fingerprint(item)
    }
}

/// Any key function is a fingerprinter that never fails
impl<T, F> Fingerprinter<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> String,
{
    fn fingerprint(&self, item: &T) -> StreamResult<String> {
        Ok(self(item))
    }
}

/// Encode `item` to its canonical structural form.
///
/// Map and struct entries are sorted by their encoded key, so hash maps with
/// different iteration orders encode identically.
///
/// # Errors
///
/// Returns [`StreamError::Encoding`](crate::error::StreamError::Encoding) when
/// the element's `Serialize` impl reports an error.
pub fn fingerprint<T>(item: &T) -> StreamResult<String>
where
    T: Serialize + ?Sized,
{
    Ok(item.serialize(Encoder)?)
}

/// Raised by a `Serialize` impl that refuses to encode its value
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct EncodingError(String);

impl ser::Error for EncodingError {
    fn custom<M: Display>(msg: M) -> Self {
        EncodingError(msg.to_string())
    }
}

fn text(tag: char, value: &str) -> String {
    format!("{}{}:{}", tag, value.len(), value)
}

fn integer(value: impl Display) -> String {
    format!("i{};", value)
}

fn float(value: f64) -> String {
    format!("d{:016x}", value.to_bits())
}

fn variant(name: &str) -> String {
    format!("V{}", text('s', name))
}

/// Serializer producing one encoded token per value
struct Encoder;

impl ser::Serializer for Encoder {
    type Ok = String;
    type Error = EncodingError;
    type SerializeSeq = SeqEncoder;
    type SerializeTuple = SeqEncoder;
    type SerializeTupleStruct = SeqEncoder;
    type SerializeTupleVariant = SeqEncoder;
    type SerializeMap = MapEncoder;
    type SerializeStruct = MapEncoder;
    type SerializeStructVariant = MapEncoder;

    fn serialize_bool(self, v: bool) -> Result<String, EncodingError> {
        Ok(if v { "T" } else { "F" }.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_i16(self, v: i16) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_i32(self, v: i32) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_i64(self, v: i64) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_u16(self, v: u16) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_u32(self, v: u32) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_u64(self, v: u64) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_u128(self, v: u128) -> Result<String, EncodingError> {
        Ok(integer(v))
    }

    fn serialize_f32(self, v: f32) -> Result<String, EncodingError> {
        // Widening is exact, NaN payloads included
        Ok(float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<String, EncodingError> {
        Ok(float(v))
    }

    fn serialize_char(self, v: char) -> Result<String, EncodingError> {
        Ok(text('c', v.encode_utf8(&mut [0; 4])))
    }

    fn serialize_str(self, v: &str) -> Result<String, EncodingError> {
        Ok(text('s', v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<String, EncodingError> {
        let mut out = format!("x{}:", v.len());
        for byte in v {
            let _ = write!(out, "{:02x}", byte);
        }
        Ok(out)
    }

    fn serialize_none(self) -> Result<String, EncodingError> {
        Ok("N".to_string())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String, EncodingError>
    where
        T: Serialize + ?Sized,
    {
        Ok(format!("S{}", value.serialize(Encoder)?))
    }

    fn serialize_unit(self) -> Result<String, EncodingError> {
        Ok("U".to_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, EncodingError> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant_name: &'static str,
    ) -> Result<String, EncodingError> {
        Ok(variant(variant_name))
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, EncodingError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(Encoder)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant_name: &'static str,
        value: &T,
    ) -> Result<String, EncodingError>
    where
        T: Serialize + ?Sized,
    {
        Ok(format!("{}{}", variant(variant_name), value.serialize(Encoder)?))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqEncoder, EncodingError> {
        Ok(SeqEncoder::new(String::new()))
    }

    fn serialize_tuple(self, _len: usize) -> Result<SeqEncoder, EncodingError> {
        Ok(SeqEncoder::new(String::new()))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<SeqEncoder, EncodingError> {
        Ok(SeqEncoder::new(String::new()))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant_name: &'static str,
        _len: usize,
    ) -> Result<SeqEncoder, EncodingError> {
        Ok(SeqEncoder::new(variant(variant_name)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapEncoder, EncodingError> {
        Ok(MapEncoder::new(String::new()))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<MapEncoder, EncodingError> {
        Ok(MapEncoder::new(String::new()))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant_name: &'static str,
        _len: usize,
    ) -> Result<MapEncoder, EncodingError> {
        Ok(MapEncoder::new(variant(variant_name)))
    }
}

/// Sequences, tuples and tuple variants keep element order
struct SeqEncoder {
    out: String,
}

impl SeqEncoder {
    fn new(prefix: String) -> Self {
        let mut out = prefix;
        out.push('[');
        Self { out }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.out.push_str(&value.serialize(Encoder)?);
        Ok(())
    }

    fn finish(mut self) -> Result<String, EncodingError> {
        self.out.push(']');
        Ok(self.out)
    }
}

impl ser::SerializeSeq for SeqEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.push(value)
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.push(value)
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.push(value)
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SeqEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        self.push(value)
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

/// Maps, structs and struct variants, with entries sorted on output
struct MapEncoder {
    prefix: String,
    entries: Vec<(String, String)>,
    pending_key: Option<String>,
}

impl MapEncoder {
    fn new(prefix: String) -> Self {
        Self {
            prefix,
            entries: Vec::new(),
            pending_key: None,
        }
    }

    fn finish(self) -> Result<String, EncodingError> {
        let MapEncoder {
            mut prefix,
            mut entries,
            ..
        } = self;
        entries.sort();

        prefix.push('{');
        for (key, value) in entries {
            prefix.push_str(&key);
            prefix.push_str(&value);
        }
        prefix.push('}');
        Ok(prefix)
    }

    fn push_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), EncodingError> {
        self.entries.push((text('s', key), value.serialize(Encoder)?));
        Ok(())
    }
}

impl ser::SerializeMap for MapEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), EncodingError> {
        self.pending_key = Some(key.serialize(Encoder)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| <EncodingError as ser::Error>::custom("map value without a key"))?;
        self.entries.push((key, value.serialize(Encoder)?));
        Ok(())
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

impl ser::SerializeStruct for MapEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), EncodingError> {
        self.push_field(key, value)
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for MapEncoder {
    type Ok = String;
    type Error = EncodingError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), EncodingError> {
        self.push_field(key, value)
    }

    fn end(self) -> Result<String, EncodingError> {
        self.finish()
    }
}

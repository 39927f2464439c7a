//!
//! Support for serde implementations
//!
//! A ring is serialized as a struct holding its base and its digits,
//! most significant first. Deserialization validates both.
//!
use crate::*;
use serde::{de, ser};
use ser::{SerializeStruct, Serializer};


const FIELDS: &[&str] = &["base", "digits"];

/// Serializes the digit sequence of a ring
struct DigitSeq<'a>(&'a DigitRing);

impl ser::Serialize for DigitSeq<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl ser::Serialize for DigitRing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DigitRing", 2)?;
        state.serialize_field("base", &self.base())?;
        state.serialize_field("digits", &DigitSeq(self))?;
        state.end()
    }
}


enum Field {
    Base,
    Digits,
}

struct FieldVisitor;

impl<'de> de::Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "`base` or `digits`")
    }

    fn visit_str<E>(self, value: &str) -> Result<Field, E>
    where
        E: de::Error,
    {
        match value {
            "base" => Ok(Field::Base),
            "digits" => Ok(Field::Digits),
            _ => Err(de::Error::unknown_field(value, FIELDS)),
        }
    }
}

impl<'de> de::Deserialize<'de> for Field {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_identifier(FieldVisitor)
    }
}


/// Used by SerDe to construct a DigitRing
struct DigitRingVisitor;

impl DigitRingVisitor {
    fn build<E: de::Error>(base: u32, digits: Vec<Digit>) -> Result<DigitRing, E> {
        DigitRing::from_digits(base, digits).map_err(E::custom)
    }
}

impl<'de> de::Visitor<'de> for DigitRingVisitor {
    type Value = DigitRing;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a digit ring with base and digits")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<DigitRing, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let base = seq.next_element()?
                      .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let digits = seq.next_element()?
                        .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Self::build(base, digits)
    }

    fn visit_map<A>(self, mut map: A) -> Result<DigitRing, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut base = None;
        let mut digits = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Base => {
                    if base.is_some() {
                        return Err(de::Error::duplicate_field("base"));
                    }
                    base = Some(map.next_value()?);
                }
                Field::Digits => {
                    if digits.is_some() {
                        return Err(de::Error::duplicate_field("digits"));
                    }
                    digits = Some(map.next_value()?);
                }
            }
        }
        let base = base.ok_or_else(|| de::Error::missing_field("base"))?;
        let digits = digits.ok_or_else(|| de::Error::missing_field("digits"))?;
        Self::build(base, digits)
    }
}

impl<'de> de::Deserialize<'de> for DigitRing {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_struct("DigitRing", FIELDS, DigitRingVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    #[test]
    fn serialize_deserialize_tokens() {
        let ring = DigitRing::from_digits(3, [2, 0, 1]).unwrap();
        assert_tokens(&ring, &[
            Token::Struct { name: "DigitRing", len: 2 },
            Token::Str("base"),
            Token::U32(3),
            Token::Str("digits"),
            Token::Seq { len: Some(3) },
            Token::U32(2),
            Token::U32(0),
            Token::U32(1),
            Token::SeqEnd,
            Token::StructEnd,
        ]);
    }

    #[test]
    fn serialize_empty_ring() {
        let ring = DigitRing::new(8).unwrap();
        assert_tokens(&ring, &[
            Token::Struct { name: "DigitRing", len: 2 },
            Token::Str("base"),
            Token::U32(8),
            Token::Str("digits"),
            Token::Seq { len: Some(0) },
            Token::SeqEnd,
            Token::StructEnd,
        ]);
    }

    #[test]
    fn deserialize_from_seq() {
        let expected = DigitRing::from_digits(10, [4, 2]).unwrap();
        assert_de_tokens(&expected, &[
            Token::Seq { len: Some(2) },
            Token::U32(10),
            Token::Seq { len: Some(2) },
            Token::U32(4),
            Token::U32(2),
            Token::SeqEnd,
            Token::SeqEnd,
        ]);
    }

    #[test]
    fn deserialize_rejects_invalid_digit() {
        assert_de_tokens_error::<DigitRing>(&[
            Token::Struct { name: "DigitRing", len: 2 },
            Token::Str("base"),
            Token::U32(3),
            Token::Str("digits"),
            Token::Seq { len: Some(1) },
            Token::U32(3),
            Token::SeqEnd,
            Token::StructEnd,
        ], "Digit 3 is not valid for base 3");
    }

    #[test]
    fn deserialize_rejects_invalid_base() {
        assert_de_tokens_error::<DigitRing>(&[
            Token::Struct { name: "DigitRing", len: 2 },
            Token::Str("base"),
            Token::U32(1),
            Token::Str("digits"),
            Token::Seq { len: Some(0) },
            Token::SeqEnd,
            Token::StructEnd,
        ], "Invalid base 1");
    }

    #[test]
    fn deserialize_missing_digits() {
        assert_de_tokens_error::<DigitRing>(&[
            Token::Struct { name: "DigitRing", len: 1 },
            Token::Str("base"),
            Token::U32(3),
            Token::StructEnd,
        ], "missing field `digits`");
    }

    #[test]
    fn json_round_trip() {
        let ring = DigitRing::from_digits(3, [2, 0, 1]).unwrap();
        let json = serde_json::to_string(&ring).unwrap();
        assert_eq!(json, r#"{"base":3,"digits":[2,0,1]}"#);

        let parsed: DigitRing = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ring);
        assert_eq!(parsed.base(), 3);
    }
}

//! Canonical byte form of a value for digesting
//!
//! Text hashes as its UTF-8 bytes and raw bytes hash as themselves. Scalars
//! hash as the JVM object-stream encoding of their boxed class
//! (`java.lang.Integer`, `java.lang.Double`, ...). Agent programs that
//! exchange digests with JVM-hosted interpreters rely on that byte layout, so
//! it is reproduced exactly here.

use super::CodecError;
use crate::term::Term;
use std::borrow::Cow;

const STREAM_MAGIC: u16 = 0xaced;
const STREAM_VERSION: u16 = 5;

const TC_NULL: u8 = 0x70;
const TC_CLASSDESC: u8 = 0x72;
const TC_OBJECT: u8 = 0x73;
const TC_ENDBLOCKDATA: u8 = 0x78;

const SC_SERIALIZABLE: u8 = 0x02;

const VALUE_FIELD: &str = "value";

/// `java.lang.Number`, the serializable superclass of the numeric boxes
const NUMBER_CLASS: (&str, i64) = ("java.lang.Number", -8742448824652078965);

/// Class descriptor of a boxed scalar with a single `value` field
struct BoxedClass {
    name: &'static str,
    serial_version_uid: i64,
    field_type: u8,
    extends_number: bool,
}

const BOOLEAN: BoxedClass = BoxedClass {
    name: "java.lang.Boolean",
    serial_version_uid: -3665804199014368530,
    field_type: b'Z',
    extends_number: false,
};

const INTEGER: BoxedClass = BoxedClass {
    name: "java.lang.Integer",
    serial_version_uid: 1360826667806852920,
    field_type: b'I',
    extends_number: true,
};

const LONG: BoxedClass = BoxedClass {
    name: "java.lang.Long",
    serial_version_uid: 4290774380558885855,
    field_type: b'J',
    extends_number: true,
};

const FLOAT: BoxedClass = BoxedClass {
    name: "java.lang.Float",
    serial_version_uid: -2671257302660747028,
    field_type: b'F',
    extends_number: true,
};

const DOUBLE: BoxedClass = BoxedClass {
    name: "java.lang.Double",
    serial_version_uid: -9172774392245257468,
    field_type: b'D',
    extends_number: true,
};

/// Bytes a digest is computed over
pub fn canonical_bytes(term: &Term) -> Result<Cow<'_, [u8]>, CodecError> {
    let bytes = match term {
        Term::Text(text) => Cow::Borrowed(text.as_bytes()),
        Term::Bytes(bytes) => Cow::Borrowed(bytes.as_slice()),
        Term::Bool(value) => Cow::Owned(boxed(&BOOLEAN, &[u8::from(*value)])),
        Term::Int(value) => Cow::Owned(boxed(&INTEGER, &value.to_be_bytes())),
        Term::Long(value) => Cow::Owned(boxed(&LONG, &value.to_be_bytes())),
        Term::Float(value) => Cow::Owned(boxed(&FLOAT, &value.to_bits().to_be_bytes())),
        Term::Double(value) => Cow::Owned(boxed(&DOUBLE, &value.to_bits().to_be_bytes())),
        Term::Key(_) => return Err(CodecError::UnencodableValue(term.type_name())),
    };
    Ok(bytes)
}

fn boxed(class: &BoxedClass, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(96);
    out.extend_from_slice(&STREAM_MAGIC.to_be_bytes());
    out.extend_from_slice(&STREAM_VERSION.to_be_bytes());
    out.push(TC_OBJECT);

    write_class_header(&mut out, class.name, class.serial_version_uid);
    out.extend_from_slice(&1u16.to_be_bytes());
    out.push(class.field_type);
    write_utf(&mut out, VALUE_FIELD);
    out.push(TC_ENDBLOCKDATA);

    if class.extends_number {
        write_class_header(&mut out, NUMBER_CLASS.0, NUMBER_CLASS.1);
        out.extend_from_slice(&0u16.to_be_bytes());
        out.push(TC_ENDBLOCKDATA);
    }
    out.push(TC_NULL);

    out.extend_from_slice(value);
    out
}

fn write_class_header(out: &mut Vec<u8>, name: &str, serial_version_uid: i64) {
    out.push(TC_CLASSDESC);
    write_utf(out, name);
    out.extend_from_slice(&serial_version_uid.to_be_bytes());
    out.push(SC_SERIALIZABLE);
}

// Class and field names are ASCII, so modified UTF-8 equals plain UTF-8 here
fn write_utf(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_utf8() {
        let term = Term::from("test string");
        assert_eq!(canonical_bytes(&term).unwrap().as_ref(), b"test string");
    }

    #[test]
    fn test_integer_stream_layout() {
        let bytes = canonical_bytes(&Term::Int(1234)).unwrap();
        let expected = hex::decode(concat!(
            "aced0005737200116a6176612e6c616e672e496e746567657212e2a0a4f781873802000149",
            "000576616c7565787200106a6176612e6c616e672e4e756d62657286ac951d0b94e08b0200",
            "007870000004d2"
        ))
        .unwrap();
        assert_eq!(bytes.as_ref(), expected.as_slice());
    }

    #[test]
    fn test_boolean_has_no_number_superclass() {
        let bytes = canonical_bytes(&Term::Bool(true)).unwrap();
        assert_eq!(bytes.len(), 47);
        assert_eq!(bytes[bytes.len() - 2], TC_NULL);
        assert_eq!(bytes[bytes.len() - 1], 1);
    }

    #[test]
    fn test_wide_scalars_carry_eight_bytes() {
        let long = canonical_bytes(&Term::Long(1)).unwrap();
        let double = canonical_bytes(&Term::Double(1.0)).unwrap();
        assert_eq!(&long[long.len() - 8..], &1i64.to_be_bytes());
        assert_eq!(&double[double.len() - 8..], &1.0f64.to_bits().to_be_bytes());
    }

    #[test]
    fn test_key_is_rejected() {
        use crate::keys::{KeyMaterial, SecretKey};
        let term = Term::from(KeyMaterial::Secret(SecretKey::from_bytes("des", vec![1u8; 8])));
        assert_eq!(
            canonical_bytes(&term),
            Err(CodecError::UnencodableValue("key"))
        );
    }
}

//! Protobuf wire encoding for protocol messages.
//!
//! Hand-rolled proto3 encoder for the small subset of the protocol schema a
//! cast submission needs. Fields are emitted in ascending field-number order
//! and default values are omitted, so encoding the same logical message
//! twice always produces byte-identical output.
//!
//! The canonical encoding is critical: the content hash is computed over
//! these bytes and the signature is computed over that hash, so any
//! instability here would invalidate signatures downstream.

use crate::message::{CastBody, MessageData, MessageEnvelope};

/// Varint wire type (major type 0).
const WIRE_VARINT: u64 = 0;
/// Length-delimited wire type (strings, bytes, nested messages).
const WIRE_LEN: u64 = 2;

/// Protobuf field numbers for the message schema.
mod fields {
    // CastAddBody
    pub const BODY_TEXT: u64 = 4;
    pub const BODY_EMBEDS: u64 = 6;
    pub const BODY_PARENT_URL: u64 = 7;

    // Embed
    pub const EMBED_URL: u64 = 1;

    // MessageData
    pub const DATA_TYPE: u64 = 1;
    pub const DATA_FID: u64 = 2;
    pub const DATA_TIMESTAMP: u64 = 3;
    pub const DATA_NETWORK: u64 = 4;
    pub const DATA_CAST_ADD_BODY: u64 = 5;

    // Message
    pub const MSG_HASH: u64 = 2;
    pub const MSG_HASH_SCHEME: u64 = 3;
    pub const MSG_SIGNATURE: u64 = 4;
    pub const MSG_SIGNATURE_SCHEME: u64 = 5;
    pub const MSG_SIGNER: u64 = 6;
    pub const MSG_DATA_BYTES: u64 = 7;
}

/// Encode a cast-add body to canonical wire bytes.
pub fn encode_cast_add_body(body: &CastBody) -> Vec<u8> {
    let mut buf = Vec::new();

    encode_string_field(&mut buf, fields::BODY_TEXT, &body.text);

    for url in &body.embeds {
        // Each embed is a nested message holding a url in its oneof slot.
        let mut embed = Vec::new();
        encode_tag(&mut embed, fields::EMBED_URL, WIRE_LEN);
        encode_varint(&mut embed, url.len() as u64);
        embed.extend_from_slice(url.as_bytes());

        encode_tag(&mut buf, fields::BODY_EMBEDS, WIRE_LEN);
        encode_varint(&mut buf, embed.len() as u64);
        buf.extend_from_slice(&embed);
    }

    if let Some(parent_url) = &body.parent_url {
        encode_tag(&mut buf, fields::BODY_PARENT_URL, WIRE_LEN);
        encode_varint(&mut buf, parent_url.len() as u64);
        buf.extend_from_slice(parent_url.as_bytes());
    }

    buf
}

/// Encode message data (the hashed and signed portion) to wire bytes.
pub fn encode_message_data(data: &MessageData) -> Vec<u8> {
    let mut buf = Vec::new();

    encode_uint_field(&mut buf, fields::DATA_TYPE, data.message_type as u64);
    encode_uint_field(&mut buf, fields::DATA_FID, data.fid);
    encode_uint_field(&mut buf, fields::DATA_TIMESTAMP, u64::from(data.timestamp));
    encode_uint_field(&mut buf, fields::DATA_NETWORK, data.network as u64);

    let body = encode_cast_add_body(&data.body);
    encode_tag(&mut buf, fields::DATA_CAST_ADD_BODY, WIRE_LEN);
    encode_varint(&mut buf, body.len() as u64);
    buf.extend_from_slice(&body);

    buf
}

/// Encode a full envelope to the wire form a hub accepts.
pub fn encode_message(envelope: &MessageEnvelope) -> Vec<u8> {
    let mut buf = Vec::new();

    encode_bytes_field(&mut buf, fields::MSG_HASH, envelope.hash.as_bytes());
    encode_uint_field(&mut buf, fields::MSG_HASH_SCHEME, envelope.hash_scheme as u64);
    encode_bytes_field(&mut buf, fields::MSG_SIGNATURE, envelope.signature.as_bytes());
    encode_uint_field(
        &mut buf,
        fields::MSG_SIGNATURE_SCHEME,
        envelope.signature_scheme as u64,
    );
    encode_bytes_field(&mut buf, fields::MSG_SIGNER, envelope.signer.as_bytes());
    encode_bytes_field(&mut buf, fields::MSG_DATA_BYTES, &envelope.data_bytes);

    buf
}

/// Encode a base-128 varint.
fn encode_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

/// Encode a field tag: `(field_number << 3) | wire_type`.
fn encode_tag(buf: &mut Vec<u8>, field: u64, wire_type: u64) {
    encode_varint(buf, (field << 3) | wire_type);
}

/// Encode a varint field, omitting the proto3 default (zero).
fn encode_uint_field(buf: &mut Vec<u8>, field: u64, value: u64) {
    if value == 0 {
        return;
    }
    encode_tag(buf, field, WIRE_VARINT);
    encode_varint(buf, value);
}

/// Encode a string field, omitting the proto3 default (empty).
fn encode_string_field(buf: &mut Vec<u8>, field: u64, value: &str) {
    if value.is_empty() {
        return;
    }
    encode_tag(buf, field, WIRE_LEN);
    encode_varint(buf, value.len() as u64);
    buf.extend_from_slice(value.as_bytes());
}

/// Encode a bytes field. Always emitted: every envelope field is mandatory.
fn encode_bytes_field(buf: &mut Vec<u8>, field: u64, value: &[u8]) {
    encode_tag(buf, field, WIRE_LEN);
    encode_varint(buf, value.len() as u64);
    buf.extend_from_slice(value);
}

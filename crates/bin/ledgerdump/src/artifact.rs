//! Length-delimited framing for the dump artifact.
//!
//! The artifact is a flat, append-only byte stream: protobuf messages with a
//! varint length prefix, plus one raw little-endian u32 for the package
//! count. There is no footer and no end-of-stream marker; readers rely on
//! stream exhaustion.

use std::io::{self, Write};

use prost::Message;

/// Wire-compatible with `google.protobuf.StringValue`.
#[derive(Clone, PartialEq, Message)]
pub(crate) struct StringRecord {
    #[prost(string, tag = "1")]
    pub(crate) value: String,
}

pub struct ArtifactWriter<W> {
    out: W,
}

impl<W: Write> ArtifactWriter<W> {
    pub fn new(out: W) -> Self {
        ArtifactWriter { out }
    }

    /// Write a string as a delimited [`StringRecord`].
    pub fn string(&mut self, value: &str) -> io::Result<()> {
        self.message(&StringRecord {
            value: value.to_owned(),
        })
    }

    /// Write a raw little-endian u32. Used only for the package count.
    pub fn count(&mut self, value: u32) -> io::Result<()> {
        self.out.write_all(&value.to_le_bytes())
    }

    /// Write any protobuf message with a varint length prefix.
    pub fn message<M: Message>(&mut self, message: &M) -> io::Result<()> {
        let buf = message.encode_length_delimited_to_vec();
        self.out.write_all(&buf)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::bytes::Buf as _;

    #[test]
    fn records_decode_back_in_order() {
        let mut buf = Vec::new();
        let mut writer = ArtifactWriter::new(&mut buf);
        writer.string("subject").unwrap();
        writer.count(7).unwrap();
        writer.string("after-count").unwrap();
        writer.flush().unwrap();

        let mut cursor = &buf[..];
        let first = StringRecord::decode_length_delimited(&mut cursor).unwrap();
        assert_eq!(first.value, "subject");
        assert_eq!(cursor.get_u32_le(), 7);
        let second = StringRecord::decode_length_delimited(&mut cursor).unwrap();
        assert_eq!(second.value, "after-count");
        assert!(cursor.is_empty());
    }

    #[test]
    fn count_is_little_endian() {
        let mut buf = Vec::new();
        ArtifactWriter::new(&mut buf).count(0x0102_0304).unwrap();
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
    }
}

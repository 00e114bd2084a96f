//! Index entry representation
//!
//! An entry is either a staged addition, carrying the file name and the exact bytes that
//! will be committed, or a staged removal, carrying only the file name.

use crate::artifacts::index::checksum::Checksum;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use std::io::Write;

/// Maximum file name length supported in index entries
const MAX_NAME_SIZE: usize = 4095;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    Addition { name: String, content: Bytes },
    Removal { name: String },
}

impl IndexEntry {
    pub fn name(&self) -> &str {
        match self {
            IndexEntry::Addition { name, .. } | IndexEntry::Removal { name } => name,
        }
    }

    pub(crate) fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut entry_bytes = Vec::new();
        let name = self.name().as_bytes();
        if name.len() > MAX_NAME_SIZE {
            anyhow::bail!("File name too long for the index: {}", self.name());
        }

        entry_bytes.write_u32::<byteorder::NetworkEndian>(name.len() as u32)?;
        entry_bytes.write_all(name)?;

        if let IndexEntry::Addition { content, .. } = self {
            entry_bytes.write_u64::<byteorder::NetworkEndian>(content.len() as u64)?;
            entry_bytes.write_all(content)?;
        }

        Ok(Bytes::from(entry_bytes))
    }

    /// Read an addition; `limit` bounds the declared lengths by the index file size
    pub(crate) fn read_addition(reader: &mut Checksum, limit: u64) -> anyhow::Result<Self> {
        let name = Self::read_name(reader, limit)?;

        let content_len = byteorder::NetworkEndian::read_u64(&reader.read(8)?);
        if content_len > limit {
            anyhow::bail!("Corrupt index entry for {name}: content length {content_len}");
        }
        let content = reader.read(content_len as usize)?;

        Ok(IndexEntry::Addition { name, content })
    }

    pub(crate) fn read_removal(reader: &mut Checksum, limit: u64) -> anyhow::Result<Self> {
        let name = Self::read_name(reader, limit)?;
        Ok(IndexEntry::Removal { name })
    }

    fn read_name(reader: &mut Checksum, limit: u64) -> anyhow::Result<String> {
        let name_len = byteorder::NetworkEndian::read_u32(&reader.read(4)?) as usize;
        if name_len == 0 || name_len > MAX_NAME_SIZE || name_len as u64 > limit {
            anyhow::bail!("Corrupt index entry: name length {name_len}");
        }

        let name = reader.read(name_len)?;
        String::from_utf8(name.to_vec()).map_err(|_| anyhow::anyhow!("Invalid file name in index"))
    }
}

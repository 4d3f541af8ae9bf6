//! Word file reading
//!
//! Detects the encoding of a dictionary file and iterates its lines through a
//! memory map, transcoding to UTF-8 where needed.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Bytes sampled for encoding detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Length of the byte order mark, if any
    pub bom_len: usize,
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            bom_len: 0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of raw file content
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, bom_len)) = detect_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            bom_len,
            encoding,
        };
    }

    let sample = &content[..content.len().min(SAMPLE_SIZE)];

    // Plain ASCII/UTF-8 word lists are the common case. A sample cut inside
    // a multibyte character fails only with an incomplete tail.
    match std::str::from_utf8(sample) {
        Ok(_) => return EncodingInfo::default(),
        Err(e) if e.error_len().is_none() && sample.len() < content.len() => {
            return EncodingInfo::default();
        }
        Err(_) => {}
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        bom_len: 0,
        encoding,
    }
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<(&'static Encoding, usize)> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some((encoding_rs::UTF_8, 3));
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some((encoding_rs::UTF_16BE, 2));
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some((encoding_rs::UTF_16LE, 2));
    }
    None
}

/// Memory-mapped line iterator over a word file
pub struct WordFileReader {
    mmap: Option<Mmap>,
    info: EncodingInfo,
    position: usize,
}

impl WordFileReader {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("Cannot open word file {:?}: {}", path, e))?;

        if file.metadata()?.len() == 0 {
            return Ok(Self {
                mmap: None,
                info: EncodingInfo::default(),
                position: 0,
            });
        }

        // SAFETY: the map is read-only and lives no longer than this reader
        let mmap = unsafe { Mmap::map(&file)? };
        let info = detect_encoding(&mmap);
        log::debug!("Word file {:?} detected as {}", path, info.name);

        Ok(Self {
            position: info.bom_len,
            mmap: Some(mmap),
            info,
        })
    }

    /// Total size of the file in bytes
    pub fn size(&self) -> usize {
        self.mmap.as_ref().map_or(0, |m| m.len())
    }

    pub fn encoding(&self) -> &EncodingInfo {
        &self.info
    }

    /// UTF-16 lines cannot be split on a single newline byte, so those files
    /// are decoded whole and split afterwards.
    fn is_wide(&self) -> bool {
        self.info.encoding == encoding_rs::UTF_16LE || self.info.encoding == encoding_rs::UTF_16BE
    }

    /// Decode everything remaining into lines
    pub fn into_lines(self) -> Vec<String> {
        if self.is_wide() {
            let Some(mmap) = self.mmap.as_ref() else {
                return Vec::new();
            };
            let (decoded, _, _) = self.info.encoding.decode(mmap);
            return decoded.lines().map(str::to_string).collect();
        }

        self.collect()
    }
}

impl Iterator for WordFileReader {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mmap = self.mmap.as_ref()?;
        if self.position >= mmap.len() {
            return None;
        }

        let remaining = &mmap[self.position..];
        let line_end = memchr::memchr(b'\n', remaining)
            .map(|i| i + 1)
            .unwrap_or(remaining.len());

        let line_bytes = &remaining[..line_end];
        self.position += line_end;

        let line_bytes = line_bytes.strip_suffix(b"\n").unwrap_or(line_bytes);
        let line_bytes = line_bytes.strip_suffix(b"\r").unwrap_or(line_bytes);

        if self.info.encoding == encoding_rs::UTF_8 {
            match std::str::from_utf8(line_bytes) {
                Ok(s) => Some(s.to_string()),
                Err(_) => Some(String::from_utf8_lossy(line_bytes).into_owned()),
            }
        } else {
            let (decoded, _, had_errors) = self.info.encoding.decode(line_bytes);
            if had_errors {
                log::warn!("Encoding errors in word file line, using lossy conversion");
            }
            Some(decoded.into_owned())
        }
    }
}

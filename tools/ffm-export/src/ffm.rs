//! `.ffm` output format
//!
//! A flat list of vertex records, one per face-vertex:
//!
//! ```text
//! {{x,y,z}, {nx,ny,nz}, {u,v}, texId},
//! {{x,y,z}, {nx,ny,nz}, {u,v}, texId}
//! ```
//!
//! Records are joined by `,\n` with no leading or trailing separator.

use std::fmt;
use std::io::{self, Write};

/// Input mesh extension
pub const OBJ_EXT: &str = "obj";

/// Output file extension
pub const FFM_EXT: &str = "ffm";

/// Emitted verbatim in every record; resolved to a real texture id downstream.
pub const TEX_ID_PLACEHOLDER: &str = "texId";

pub const RECORD_SEPARATOR: &str = ",\n";

/// One resolved face-vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmRecord {
    pub position: String,
    pub normal: String,
    pub uv: String,
}

impl fmt::Display for FfmRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{{{}}}, {{{}}}, {{{}}}, {}}}",
            self.position, self.normal, self.uv, TEX_ID_PLACEHOLDER
        )
    }
}

/// Write records joined by [`RECORD_SEPARATOR`]
pub fn write_ffm<W: Write>(w: &mut W, records: &[FfmRecord]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            w.write_all(RECORD_SEPARATOR.as_bytes())?;
        }
        write!(w, "{}", record)?;
    }
    Ok(())
}

//! OBJ -> .ffm conversion

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConvertError;
use crate::ffm::{write_ffm, FfmRecord};
use crate::obj::{parse_line, FaceVertex, ObjLine};

/// Result of in-memory conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertedFfm {
    /// Number of `v` lines read
    pub position_count: usize,
    /// Number of `vt` lines read
    pub uv_count: usize,
    /// Number of `vn` lines read
    pub normal_count: usize,
    /// Number of `f` lines read
    pub face_count: usize,
    /// One record per face-vertex, in file order
    pub records: Vec<FfmRecord>,
}

impl ConvertedFfm {
    /// Render the full `.ffm` file contents
    pub fn to_ffm_string(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = write_ffm(&mut out, &self.records);
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Attribute tables accumulated while scanning the file
#[derive(Default)]
struct AttributeTables {
    positions: Vec<String>,
    uvs: Vec<String>,
    normals: Vec<String>,
}

impl AttributeTables {
    fn resolve(&self, vertex: FaceVertex, line: usize) -> Result<FfmRecord, ConvertError> {
        Ok(FfmRecord {
            position: lookup(&self.positions, vertex.position, "position", line)?,
            normal: lookup(&self.normals, vertex.normal, "normal", line)?,
            uv: lookup(&self.uvs, vertex.uv, "uv", line)?,
        })
    }
}

fn lookup(
    table: &[String],
    index: usize,
    kind: &'static str,
    line: usize,
) -> Result<String, ConvertError> {
    // Face indices are 1-based
    index
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .cloned()
        .ok_or(ConvertError::IndexOutOfRange {
            line,
            kind,
            index,
            available: table.len(),
        })
}

/// Convert OBJ source text in a single pass.
///
/// Faces are resolved as they are encountered, so every attribute a face
/// references must appear earlier in the file.
pub fn convert_obj_str(source: &str) -> Result<ConvertedFfm, ConvertError> {
    let mut tables = AttributeTables::default();
    let mut converted = ConvertedFfm::default();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let parsed = parse_line(raw).map_err(|source| ConvertError::Parse { line, source })?;

        match parsed {
            Some(ObjLine::Position(p)) => tables.positions.push(p),
            Some(ObjLine::TexCoord(t)) => tables.uvs.push(t),
            Some(ObjLine::Normal(n)) => tables.normals.push(n),
            Some(ObjLine::Face(verts)) => {
                converted.face_count += 1;
                for vertex in verts {
                    converted.records.push(tables.resolve(vertex, line)?);
                }
            }
            None => {}
        }
    }

    converted.position_count = tables.positions.len();
    converted.uv_count = tables.uvs.len();
    converted.normal_count = tables.normals.len();

    tracing::debug!(
        "Parsed OBJ: {} positions, {} uvs, {} normals, {} faces",
        converted.position_count,
        converted.uv_count,
        converted.normal_count,
        converted.face_count
    );

    Ok(converted)
}

/// Read and convert an OBJ file without writing anything
pub fn convert_obj_to_memory(input: &Path) -> Result<ConvertedFfm> {
    let source =
        fs::read_to_string(input).with_context(|| format!("Failed to read OBJ: {:?}", input))?;
    let converted =
        convert_obj_str(&source).with_context(|| format!("Failed to convert OBJ: {:?}", input))?;
    Ok(converted)
}

/// Convert an OBJ file to `.ffm`.
///
/// The output file is only created once the whole input converted, so a
/// failed run leaves nothing behind.
pub fn convert_obj(input: &Path, output: &Path) -> Result<ConvertedFfm> {
    let converted = convert_obj_to_memory(input)?;

    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    write_ffm(&mut writer, &converted.records)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write output: {:?}", output))?;

    tracing::info!(
        "Converted OBJ mesh: {} faces, {} records ({} positions, {} uvs, {} normals)",
        converted.face_count,
        converted.records.len(),
        converted.position_count,
        converted.uv_count,
        converted.normal_count
    );

    Ok(converted)
}

//! OBJ line parsing
//!
//! Only the four record kinds the `.ffm` format needs are understood:
//! `v`, `vt`, `vn` and `f`. Everything else (comments, groups, materials,
//! smoothing groups) is skipped.

use crate::error::ObjParseError;

/// One recognised OBJ line, already converted to its `.ffm` attribute text
#[derive(Debug, Clone, PartialEq)]
pub enum ObjLine {
    /// `v x y z` -> `"x,y,z"`
    Position(String),
    /// `vt u v` -> `"u,1-v"`
    TexCoord(String),
    /// `vn x y z` -> `"x,y,z"`
    Normal(String),
    /// `f p/t/n p/t/n ...`
    Face(Vec<FaceVertex>),
}

/// One corner of a face: 1-based indices into the position, UV and normal tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: usize,
    pub uv: usize,
    pub normal: usize,
}

impl FaceVertex {
    /// Parse a `p/t/n` token. All three indices are required.
    pub fn parse(token: &str) -> Result<Self, ObjParseError> {
        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() != 3 {
            return Err(ObjParseError::MalformedFaceVertex(token.to_string()));
        }

        Ok(Self {
            position: parse_index(parts[0])?,
            uv: parse_index(parts[1])?,
            normal: parse_index(parts[2])?,
        })
    }
}

/// OBJ indices are 1-based; 0 and relative (negative) indices are rejected.
fn parse_index(s: &str) -> Result<usize, ObjParseError> {
    match s.parse::<usize>() {
        Ok(i) if i > 0 => Ok(i),
        _ => Err(ObjParseError::InvalidIndex(s.to_string())),
    }
}

/// Classify and convert a single line. Returns `Ok(None)` for lines that
/// contribute nothing to the output.
pub fn parse_line(line: &str) -> Result<Option<ObjLine>, ObjParseError> {
    if let Some(rest) = line.strip_prefix("v ") {
        return join_components("v", rest, 3).map(|s| Some(ObjLine::Position(s)));
    }
    if let Some(rest) = line.strip_prefix("vt ") {
        return parse_tex_coord(rest).map(|s| Some(ObjLine::TexCoord(s)));
    }
    if let Some(rest) = line.strip_prefix("vn ") {
        return join_components("vn", rest, 3).map(|s| Some(ObjLine::Normal(s)));
    }
    if let Some(rest) = line.strip_prefix("f ") {
        let verts = rest
            .split_whitespace()
            .map(FaceVertex::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if verts.is_empty() {
            return Err(ObjParseError::EmptyFace);
        }
        return Ok(Some(ObjLine::Face(verts)));
    }
    Ok(None)
}

/// Join whitespace-separated components with commas, keeping their text as written.
fn join_components(tag: &'static str, rest: &str, expected: usize) -> Result<String, ObjParseError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() < expected {
        return Err(ObjParseError::MissingComponents {
            tag,
            expected,
            found: parts.len(),
        });
    }
    Ok(parts.join(","))
}

/// `u` is kept verbatim, `v` is flipped to the engine's top-origin convention.
/// An optional third (`w`) component is ignored.
fn parse_tex_coord(rest: &str) -> Result<String, ObjParseError> {
    let mut parts = rest.split_whitespace();
    let (Some(u), Some(v)) = (parts.next(), parts.next()) else {
        return Err(ObjParseError::MissingComponents {
            tag: "vt",
            expected: 2,
            found: rest.split_whitespace().count(),
        });
    };

    let v: f64 = v
        .parse()
        .map_err(|_| ObjParseError::InvalidFloat(v.to_string()))?;

    Ok(format!("{},{}", u, format_float(flip_v(v))))
}

/// OBJ has V=0 at the bottom of the texture, the engine expects V=0 at the top.
pub fn flip_v(v: f64) -> f64 {
    1.0 - v
}

/// Shortest round-trip text, keeping a fractional part for integral values
/// (`1.0`, not `1`).
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

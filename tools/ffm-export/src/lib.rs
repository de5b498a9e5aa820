//! ffm-export library
//!
//! Converts Wavefront OBJ meshes into the flattened `.ffm` vertex-record text
//! format read by the engine. Exposed as a library so other tools can convert
//! in memory without going through the CLI.

pub mod convert;
pub mod error;
pub mod ffm;
pub mod obj;

pub use convert::{convert_obj, convert_obj_str, convert_obj_to_memory, ConvertedFfm};
pub use error::{ConvertError, ObjParseError};
pub use ffm::{write_ffm, FfmRecord, FFM_EXT, OBJ_EXT, RECORD_SEPARATOR, TEX_ID_PLACEHOLDER};
pub use obj::{FaceVertex, ObjLine};

/// Base name converted when no input is given on the command line.
pub const DEFAULT_BASE_NAME: &str = "zombie";

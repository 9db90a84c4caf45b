// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the resource façades.

use std::fmt;

/// An error raised while loading a texture from disk.
///
/// Load failures never register a handle: the registry is left exactly as
/// it was before the call.
#[derive(Debug)]
pub enum TextureError {
    /// The file could not be read at all.
    Io {
        /// The path that failed to load.
        path: String,
        /// The underlying I/O error.
        source_error: String,
    },
    /// The file was read but its contents could not be decoded as an image.
    Decode {
        /// The path that failed to decode.
        path: String,
        /// Detailed error messages from the decoder.
        details: String,
    },
    /// The file is an image format this build carries no decoder for.
    UnsupportedFormat {
        /// The path that was rejected.
        path: String,
        /// The format (or format hint) that was recognized but unsupported.
        format: String,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Io { path, source_error } => {
                write!(f, "Failed to read texture file '{path}': {source_error}")
            }
            TextureError::Decode { path, details } => {
                write!(f, "Failed to decode texture file '{path}': {details}")
            }
            TextureError::UnsupportedFormat { path, format } => {
                write!(f, "Texture file '{path}' has an unsupported format: {format}")
            }
        }
    }
}

impl std::error::Error for TextureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = TextureError::Io {
            path: "assets/missing.png".to_string(),
            source_error: "No such file or directory".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to read texture file 'assets/missing.png': No such file or directory"
        );
    }

    #[test]
    fn decode_error_display() {
        let err = TextureError::Decode {
            path: "assets/garbage.png".to_string(),
            details: "invalid PNG signature".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to decode texture file 'assets/garbage.png': invalid PNG signature"
        );
    }

    #[test]
    fn unsupported_format_display() {
        let err = TextureError::UnsupportedFormat {
            path: "assets/photo.bmp".to_string(),
            format: "Bmp".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Texture file 'assets/photo.bmp' has an unsupported format: Bmp"
        );
    }
}

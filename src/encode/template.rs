//! Text templates for the generated LVGL C sources.
//!
//! All format strings for generated code live here so they can be checked
//! without rendering anything.

use serde::{Deserialize, Serialize};

/// Pixels per line in the emitted byte array.
pub const PIXELS_PER_LINE: usize = 4;

/// Major LVGL version the generated descriptor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum LvglVersion {
    /// `lv_img_dsc_t` with `always_zero`, no stride field.
    V8,
    /// `lv_image_dsc_t` with an explicit stride.
    #[default]
    V9,
}

impl LvglVersion {
    /// Name of the descriptor struct type.
    pub fn descriptor_type(self) -> &'static str {
        match self {
            Self::V8 => "lv_img_dsc_t",
            Self::V9 => "lv_image_dsc_t",
        }
    }
}

/// Everything needed to render one image source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTemplate<'a> {
    pub identifier: &'a str,
    /// File the icon was converted from, only used in the provenance comment.
    pub source_name: &'a str,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub data_size: usize,
    /// Pre-formatted array body, see [`format_bytes`].
    pub bytes_text: &'a str,
    pub version: LvglVersion,
}

impl SourceTemplate<'_> {
    /// Renders the complete `.c` file.
    pub fn render(&self) -> String {
        let Self {
            identifier,
            source_name,
            width,
            height,
            stride,
            data_size,
            bytes_text,
            version,
        } = self;

        let mut out = String::with_capacity(bytes_text.len() + 512);
        out.push_str(
            "#include \"lvgl.h\"\n\
             #include \"esp_attr.h\"\n\
             \n\
             #ifndef LV_ATTRIBUTE_MEM_ALIGN\n\
             #define LV_ATTRIBUTE_MEM_ALIGN\n\
             #endif\n\
             \n",
        );
        out.push_str(&format!(
            "/* Source: {source_name} | Size: {width}x{height} | Stride: {stride} */\n\n"
        ));
        out.push_str(&format!(
            "const uint8_t {identifier}_map[] __attribute__((aligned(4))) = {{\n"
        ));
        out.push_str(bytes_text);
        out.push_str("};\n\n");

        out.push_str(&format!("const {} {identifier} = {{\n", version.descriptor_type()));
        out.push_str(&format!("    .header.w = {width},\n"));
        out.push_str(&format!("    .header.h = {height},\n"));
        match version {
            LvglVersion::V8 => {
                out.push_str("    .header.always_zero = 0,\n");
                out.push_str("    .header.cf = LV_COLOR_FORMAT_ARGB8888,\n");
            }
            LvglVersion::V9 => {
                out.push_str("    .header.cf = LV_COLOR_FORMAT_ARGB8888,\n");
                out.push_str(&format!("    .header.stride = {stride},\n"));
            }
        }
        out.push_str(&format!("    .data_size = {data_size},\n"));
        out.push_str(&format!("    .data = {identifier}_map,\n"));
        out.push_str("};\n");
        out
    }
}

/// Formats encoded bytes as indented `0x..` literals, 4 pixels per line.
///
/// Every literal is followed by a comma, including the last one on a line.
pub fn format_bytes(bytes: &[u8]) -> String {
    let line_len = PIXELS_PER_LINE * 4;
    // "0xNN, " is six characters, plus indentation and newline per line.
    let mut out = String::with_capacity(bytes.len() * 6 + bytes.len() / line_len * 6 + 6);

    for line in bytes.chunks(line_len) {
        out.push_str("    ");
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("0x{byte:02x},"));
        }
        out.push('\n');
    }
    out
}

/// Renders the header that declares every generated image.
pub fn render_header<S: AsRef<str>>(identifiers: &[S]) -> String {
    let mut out = String::from("#pragma once\n#include \"lvgl.h\"\n\n/* Auto-generated file. */\n\n");
    for identifier in identifiers {
        out.push_str(&format!("LV_IMG_DECLARE({});\n", identifier.as_ref()));
    }
    out
}

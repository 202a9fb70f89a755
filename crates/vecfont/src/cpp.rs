//! C++ source emission for the embedded GUI vector font format.
//!
//! A font becomes a class `Font<Name>` with one `GUIVectorPoint` array per
//! glyph, a 256-entry `GUIFontGlyph` table indexed by byte value and the
//! nominal height.
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    command::PathCommand,
    error::{FontError, Result},
    glyph::Glyph,
    table::{FontMetrics, FontTable},
};

pub const DEFAULT_INCLUDE_PREFIX: &str = "include/assets";
const GUI_FONT_HEADER: &str = "include/gui_font.h";
const BANNER_RULE: &str =
    "------------------------------------------------------------------------------";

#[derive(Clone, Debug)]
pub struct CppWriter {
    class_name: String,
    include_prefix: String,
    banner: Option<String>,
}

impl CppWriter {
    /// Writer for a font called `font_name`; the class is `Font<font_name>`.
    pub fn new(font_name: &str) -> Self {
        Self::with_class_name(format!("Font{font_name}"))
    }

    pub fn with_class_name(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            include_prefix: DEFAULT_INCLUDE_PREFIX.to_string(),
            banner: None,
        }
    }

    pub fn include_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.include_prefix = prefix.into();
        self
    }

    /// Text placed in a comment block at the top of both files.
    pub fn banner(mut self, text: impl Into<String>) -> Self {
        self.banner = Some(text.into());
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.class_name)
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.cc", self.class_name)
    }

    pub fn header(&self, table: &FontTable) -> Result<String> {
        let idents = identifiers(table)?;
        let class = &self.class_name;
        let mut out = self.banner_block();
        writeln!(out, "#include \"{GUI_FONT_HEADER}\"\n")?;
        writeln!(out, "class {class}")?;
        out.push_str(
            "{
 public:
        static GUIVectorPoint * GetVectorDataForGlyph(char c)
        {
            uint8_t b = static_cast<uint8_t>(c);
            return glyphs_[b].data_;
        }
        static double GetWidthOfGlyph(char c)
        {
            uint8_t b = static_cast<uint8_t>(c);
            return glyphs_[b].width_;
        }
        static double Height() { return height_; }

 private:
",
        );
        writeln!(out, "        {class}() {{}}")?;
        writeln!(out, "        static double height_;")?;
        writeln!(out, "        static GUIFontGlyph glyphs_[];")?;
        for ident in idents.values() {
            writeln!(out, "        static GUIVectorPoint {ident}_data_[];")?;
        }
        out.push_str("\n};\n");
        Ok(out)
    }

    pub fn source(&self, table: &FontTable, metrics: &FontMetrics) -> Result<String> {
        let idents = identifiers(table)?;
        let class = &self.class_name;
        let mut out = self.banner_block();
        writeln!(
            out,
            "#include \"{}/{}\"\n",
            self.include_prefix,
            self.header_file_name()
        )?;

        for (code, glyph) in table.glyphs() {
            writeln!(out, "GUIVectorPoint {class}::{}_data_[] =", idents[&code])?;
            out.push_str("{\n");
            let rows: Vec<String> = glyph.commands().iter().map(vector_point).collect();
            out.push_str(&rows.join(",\n"));
            out.push_str("\n};\n\n");
        }

        writeln!(out, "GUIFontGlyph {class}::glyphs_[] =")?;
        out.push_str("{\n");
        let rows: Vec<String> = table
            .slots()
            .map(|(code, slot)| match slot {
                Some(glyph) => font_glyph(glyph, &idents[&code]),
                None => "    GUIFontGlyph()".to_string(),
            })
            .collect();
        out.push_str(&rows.join(",\n"));
        out.push_str("\n};\n\n");

        writeln!(out, "double {class}::height_ = {:.6};", metrics.height)?;
        Ok(out)
    }

    /// Render both files, then write `<Class>.cc` into `source_dir` and
    /// `<Class>.h` into `include_dir`. Both directories are created before
    /// either file is written, and the source file is removed again if the
    /// header cannot be written, so a failure never leaves half a pair.
    pub fn write_files(
        &self,
        table: &FontTable,
        metrics: &FontMetrics,
        source_dir: &Path,
        include_dir: &Path,
    ) -> Result<(PathBuf, PathBuf)> {
        let source = self.source(table, metrics)?;
        let header = self.header(table)?;
        let source_path = source_dir.join(self.source_file_name());
        let header_path = include_dir.join(self.header_file_name());
        fs::create_dir_all(source_dir)?;
        fs::create_dir_all(include_dir)?;
        fs::write(&source_path, source)?;
        if let Err(err) = fs::write(&header_path, header) {
            log::error!("writing {}: {err}", header_path.display());
            if let Err(cleanup) = fs::remove_file(&source_path) {
                log::warn!("could not remove {}: {cleanup}", source_path.display());
            }
            return Err(err.into());
        }
        Ok((source_path, header_path))
    }

    fn banner_block(&self) -> String {
        match &self.banner {
            Some(text) => format!(
                "/*{BANNER_RULE}\n{}\n{BANNER_RULE}*/\n\n\n",
                text.trim_end()
            ),
            None => String::new(),
        }
    }
}

/// C++ identifier for a glyph name.
pub fn cpp_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

fn identifiers(table: &FontTable) -> Result<BTreeMap<u8, String>> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    let mut idents = BTreeMap::new();
    for (code, glyph) in table.glyphs() {
        let ident = cpp_identifier(&glyph.identifier);
        if let Some(other) = seen.insert(ident.clone(), &glyph.identifier) {
            log::error!("'{other}' and '{}' both map to {ident}", glyph.identifier);
            return Err(FontError::DuplicateGlyph(ident));
        }
        idents.insert(code, ident);
    }
    Ok(idents)
}

fn kind(command: &PathCommand) -> &'static str {
    match command {
        PathCommand::Start => "START",
        PathCommand::Move { .. } => "MOVE",
        PathCommand::Line { .. } => "LINE",
        PathCommand::QuadCurve { .. } => "CURVE_Q",
        PathCommand::Close => "CLOSE",
        PathCommand::Exit => "EXIT",
    }
}

fn vector_point(command: &PathCommand) -> String {
    let (control_x, control_y) = match *command {
        PathCommand::QuadCurve {
            control_x,
            control_y,
            ..
        } => (control_x, control_y),
        _ => (0.0, 0.0),
    };
    let (end_x, end_y) = command.end_point().unwrap_or((0.0, 0.0));
    format!(
        "    GUIVectorPoint(GUIVectorPointType::{}, {:.2}, {:.2}, {:.2}, {:.2}, {:.2}, {:.2})",
        kind(command),
        control_x,
        control_y,
        0.0,
        0.0,
        end_x,
        end_y
    )
}

fn font_glyph(glyph: &Glyph, ident: &str) -> String {
    format!("    GUIFontGlyph({}, {ident}_data_)", glyph.advance_width)
}

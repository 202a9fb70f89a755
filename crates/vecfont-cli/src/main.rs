use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
};
use vecfont::{
    cpp::CppWriter, ttx, FontDocument, FontError, FontMetrics, FontTable, GenerateOptions,
};

use crate::report::{code_label, summary};
mod report;

#[derive(Parser)]
#[command(name = "vecfont", about = "Vector font table generator for TTX dumps")]
struct Cli {
    /// Log debug details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate the C++ .h/.cc pair for a font
    Generate {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, default_value = "src/assets")]
        source_dir: PathBuf,
        #[arg(long, default_value = "include/assets")]
        include_dir: PathBuf,
        /// Glyph whose bounding box defines the font height
        #[arg(long, default_value = "Z")]
        reference: String,
        /// File whose text is placed in a comment banner at the top of both files
        #[arg(long)]
        banner: Option<PathBuf>,
        /// Class name; defaults to Font<name>
        #[arg(long)]
        class_name: Option<String>,
    },
    /// Inspect a font's mapped glyphs and metrics
    Inspect {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, default_value = "Z")]
        reference: String,
        /// List every occupied table slot
        #[arg(long)]
        slots: bool,
    },
    /// Print one glyph's path commands as JSON
    Dump {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        glyph: String,
    },
}

fn load(input: &Path) -> Result<FontDocument> {
    ttx::load(input).with_context(|| format!("reading {}", input.display()))
}

fn options(reference: String) -> GenerateOptions {
    GenerateOptions {
        reference_glyph: reference,
        ..Default::default()
    }
}

fn describe(err: &FontError) -> String {
    match err.glyph() {
        Some(glyph) => format!("glyph '{glyph}'"),
        None => "font".to_string(),
    }
}

fn generate(
    doc: &FontDocument,
    reference: String,
) -> Result<(FontTable, FontMetrics)> {
    doc.generate(&options(reference)).map_err(|e| {
        let context = format!("generating {} ({})", doc.name, describe(&e));
        anyhow::Error::new(e).context(context)
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Cmd::Generate {
            input,
            source_dir,
            include_dir,
            reference,
            banner,
            class_name,
        } => {
            let doc = load(&input)?;
            let (table, metrics) = generate(&doc, reference)?;
            let mut writer = match class_name {
                Some(name) => CppWriter::with_class_name(name),
                None => CppWriter::new(&doc.name),
            };
            if let Some(path) = banner {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("reading banner {}", path.display()))?;
                writer = writer.banner(text);
            }
            let (source, header) = writer
                .write_files(&table, &metrics, &source_dir, &include_dir)
                .context("writing C++ files")?;
            log::info!("{} glyphs, height {}", table.glyph_count(), metrics.height);
            println!("{}", source.display());
            println!("{}", header.display());
        }
        Cmd::Inspect {
            input,
            reference,
            slots,
        } => {
            let doc = load(&input)?;
            let (table, metrics) = generate(&doc, reference)?;
            print!("{}", summary(&doc, &table, &metrics)?);
            if slots {
                for (code, glyph) in table.glyphs() {
                    println!(
                        "  {:<10} {:<12} width {:>5}  commands {}",
                        code_label(code),
                        glyph.identifier,
                        glyph.advance_width,
                        glyph.commands().len()
                    );
                }
            }
        }
        Cmd::Dump { input, glyph } => {
            let doc = load(&input)?;
            let code = doc
                .code_point_of(&glyph)
                .ok_or_else(|| anyhow::anyhow!("glyph '{glyph}' is not in the character map"))?;
            let built = doc
                .build_glyph(&glyph, code)
                .with_context(|| format!("building '{glyph}'"))?;
            println!("{}", serde_json::to_string_pretty(&built)?);
        }
    }
    Ok(())
}

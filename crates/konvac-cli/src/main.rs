use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use konvac_codegen::{compile, wrap_program, HtmlOptions, Severity};
use konvac_core::KonvacConfig;
use konvac_ir::validate::{validate_document, ValidationPolicy};
use konvac_ir::{decode, EasingPreset, SceneDocument};

#[derive(Parser)]
#[command(
    name = "konvac",
    version,
    about = "konvac: compile declarative scene documents into Konva programs",
    long_about = "konvac reads a YAML or JSON scene document (stage, layers, objects, animations)\nand writes the JavaScript program that builds it with Konva."
)]
struct Cli {
    /// Path to a konvac.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a scene document to a Konva program
    Compile {
        /// Path to the .yaml/.yml/.json scene document
        #[arg()]
        file: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit a standalone HTML page instead of bare JavaScript
        #[arg(long)]
        html: bool,

        /// Skip document validation and compile whatever decodes
        #[arg(long)]
        lenient: bool,
    },

    /// Decode and validate a scene document, then report compiler diagnostics
    Check {
        /// Path to the scene document to check
        #[arg()]
        file: PathBuf,
    },

    /// Display version and the supported easing presets
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KonvacConfig::load_from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => KonvacConfig::default(),
    };

    // Logs go to stderr; stdout is reserved for the generated program.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile {
            file,
            output,
            html,
            lenient,
        } => cmd_compile(&config, &file, output, html, lenient),
        Commands::Check { file } => cmd_check(&file),
        Commands::Info => cmd_info(),
    }
}

fn load_document(file: &Path) -> Result<SceneDocument> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read file: {}", file.display()))?;
    let is_json = file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let doc = if is_json {
        decode::from_json_str(&source)
    } else {
        decode::from_yaml_str(&source)
    };
    doc.with_context(|| format!("failed to decode {}", file.display()))
}

fn cmd_compile(
    config: &KonvacConfig,
    file: &Path,
    output: Option<PathBuf>,
    html: bool,
    lenient: bool,
) -> Result<()> {
    let doc = load_document(file)?;

    let policy = if lenient {
        ValidationPolicy::Lenient
    } else {
        ValidationPolicy::from_strict(config.validation.strict)
    };
    policy
        .apply(&doc)
        .with_context(|| format!("{} failed validation", file.display()))?;

    let compiled = compile(&doc);
    tracing::info!(
        layers = compiled.layer_count(),
        statements = compiled.statements().len(),
        diagnostics = compiled.diagnostics().len(),
        "compiled {}",
        file.display()
    );

    let program = compiled.program_text();
    let text = if html || config.output.html {
        let title = file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Konva scene".to_string());
        wrap_program(
            &program,
            &HtmlOptions {
                title,
                konva_url: config.output.konva_url.clone(),
            },
        )
    } else {
        program
    };

    match output {
        Some(path) => {
            std::fs::write(&path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_check(file: &Path) -> Result<()> {
    println!("Checking {}", file.display());

    let doc = load_document(file)?;
    println!(
        "   ✓ Decode OK ({} layers, {} objects, {} animations)",
        doc.layers.len(),
        doc.object_count(),
        doc.animation_count()
    );

    if let Err(errors) = validate_document(&doc) {
        for error in &errors {
            println!("   ✗ {error}");
        }
        anyhow::bail!("{} has {} validation error(s)", file.display(), errors.len());
    }
    println!("   ✓ Validation OK");

    let compiled = compile(&doc);
    for diag in compiled.diagnostics() {
        let icon = match diag.severity {
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        };
        println!("   {icon} {diag}");
    }
    println!(
        "   ✓ Compile OK ({} statements, {} diagnostics)",
        compiled.statements().len(),
        compiled.diagnostics().len()
    );
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("konvac scene compiler");
    println!("   Version:   {}", env!("CARGO_PKG_VERSION"));
    println!("   Target:    Konva (global `Konva`)");
    println!("   Input:     YAML, JSON");
    println!("   Easings:");
    for preset in EasingPreset::ALL {
        println!("     {:<14} -> {}", preset.name(), preset.runtime_symbol());
    }
    Ok(())
}

//! # konvac-codegen
//!
//! Compiles a [`SceneDocument`] into a Konva program: a flat list of
//! statements that rebuilds the stage, its layers and objects, attaches
//! listeners and filters, and starts the tweens.
//!
//! Compilation is a pure function of the document. Entries the compiler
//! cannot use (an animation without a target, an unknown easing) are skipped
//! with a comment in the program and a [`Diagnostic`], never an error.

pub mod codegen;
pub mod diagnostics;
pub mod emit;
pub mod html;
pub mod ident;
pub mod literal;
mod tween;

use konvac_core::KonvacResult;
use konvac_ir::validate::ValidationPolicy;
use konvac_ir::{decode, SceneDocument};

pub use codegen::Codegen;
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use html::{wrap_program, HtmlOptions};
pub use ident::Ident;

/// Result of one compile call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledScene {
    statements: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    layer_count: usize,
}

impl CompiledScene {
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// The program as text, one statement per line.
    pub fn program_text(&self) -> String {
        let mut text = self.statements.join("\n");
        text.push('\n');
        text
    }
}

/// Compile a scene document. Never fails.
pub fn compile(doc: &SceneDocument) -> CompiledScene {
    Codegen::new().generate(doc)
}

/// Decode YAML (or JSON) source, apply the validation policy, and compile.
pub fn compile_source(source: &str, policy: ValidationPolicy) -> KonvacResult<CompiledScene> {
    let doc = decode::from_yaml_str(source)?;
    policy.apply(&doc)?;
    Ok(compile(&doc))
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// What went wrong with a single entry. Positions are document indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Animation without a usable `targetName`; no tween was emitted for it.
    MissingTarget { layer: usize, index: usize },
    /// Easing name not in the preset table; the tween was emitted without it.
    UnknownEasing {
        layer: usize,
        index: usize,
        name: String,
    },
    /// Looping tween that is not autoplayed; it only runs if the host plays it.
    IdleLoop { layer: usize, index: usize },
}

/// A non-fatal problem found while compiling. The program is still complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn missing_target(layer: usize, index: usize) -> Self {
        Self {
            severity: Severity::Warning,
            message: format!("skipped animation {index} in layer {layer}: missing targetName"),
            kind: DiagnosticKind::MissingTarget { layer, index },
        }
    }

    pub fn unknown_easing(layer: usize, index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            severity: Severity::Warning,
            message: format!(
                "unknown easing {name} in animation {index} of layer {layer}; using the runtime default"
            ),
            kind: DiagnosticKind::UnknownEasing { layer, index, name },
        }
    }

    pub fn idle_loop(layer: usize, index: usize) -> Self {
        Self {
            severity: Severity::Info,
            message: format!(
                "animation {index} in layer {layer} loops but has autoplay disabled"
            ),
            kind: DiagnosticKind::IdleLoop { layer, index },
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

use serde::{Deserialize, Serialize};

/// A target-language expression supplied verbatim by the document author.
///
/// Listener bodies and filter names are carried as `RawExpr` rather than
/// `String` so that every place raw code reaches the output is visible in
/// the types. The compiler never escapes or inspects these; documents from
/// untrusted sources must be sanitised before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawExpr(String);

impl RawExpr {
    /// Wrap an expression the caller vouches for.
    pub fn trusted(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for RawExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

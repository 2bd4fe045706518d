//! Program identifiers derived from structural position.
//!
//! Names depend only on indices, so filtering an entry out never shifts the
//! names of the entries after it and no symbol table is needed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ident {
    Stage,
    Layer(usize),
    /// (layer index, object index)
    Object(usize, usize),
    /// (layer index, animation index)
    Tween(usize, usize),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Stage => f.write_str("stage"),
            Ident::Layer(i) => write!(f, "layer{i}"),
            Ident::Object(i, j) => write!(f, "obj{i}_{j}"),
            Ident::Tween(i, k) => write!(f, "tween_{i}_{k}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ident_names() {
        assert_eq!(Ident::Stage.to_string(), "stage");
        assert_eq!(Ident::Layer(3).to_string(), "layer3");
        assert_eq!(Ident::Object(0, 12).to_string(), "obj0_12");
        assert_eq!(Ident::Tween(2, 1).to_string(), "tween_2_1");
    }

    #[test]
    fn test_ident_is_stable() {
        assert_eq!(Ident::Object(4, 5).to_string(), Ident::Object(4, 5).to_string());
    }

    #[test]
    fn test_no_collisions_across_positions() {
        // obj1_11 vs obj11_1 style ambiguities are ruled out by the separator.
        let mut seen = HashSet::new();
        for i in 0..15 {
            assert!(seen.insert(Ident::Layer(i).to_string()));
            for j in 0..15 {
                assert!(seen.insert(Ident::Object(i, j).to_string()));
                assert!(seen.insert(Ident::Tween(i, j).to_string()));
            }
        }
        assert!(seen.insert(Ident::Stage.to_string()));
    }
}

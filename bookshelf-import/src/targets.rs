//! Collection size targets reported at the end of a run.

use std::fmt;

use bookshelf_catalog::types::CollectionKind;

/// Minimum sizes the collections are being grown towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub children: usize,
    pub adult: usize,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            children: CollectionKind::Children.default_target(),
            adult: CollectionKind::Adult.default_target(),
        }
    }
}

/// Whether a collection reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Reached,
    Short { remaining: usize },
}

impl Targets {
    pub fn target(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Children => self.children,
            CollectionKind::Adult => self.adult,
        }
    }

    pub fn status(&self, kind: CollectionKind, len: usize) -> TargetStatus {
        let target = self.target(kind);
        if len >= target {
            TargetStatus::Reached
        } else {
            TargetStatus::Short {
                remaining: target - len,
            }
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reached => write!(f, "target reached"),
            Self::Short { remaining } => write!(f, "needs {} more", remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets() {
        let t = Targets::default();
        assert_eq!(t.children, 1000);
        assert_eq!(t.adult, 500);
    }

    #[test]
    fn status_at_boundary() {
        let t = Targets::default();
        assert_eq!(t.status(CollectionKind::Adult, 500), TargetStatus::Reached);
        assert_eq!(
            t.status(CollectionKind::Adult, 499),
            TargetStatus::Short { remaining: 1 }
        );
        assert_eq!(
            t.status(CollectionKind::Children, 221),
            TargetStatus::Short { remaining: 779 }
        );
    }
}

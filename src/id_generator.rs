use serde::Serialize;

use crate::element::ElementId;

/// Hands out element ids for one document.
///
/// Ids start at 1 and only ever grow, so an id freed by a deletion is never
/// handed out again.
#[derive(Debug, Clone, Serialize)]
pub struct IdGenerator {
    next: ElementId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_id(&mut self) -> ElementId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.generate_id(), 1);
        assert_eq!(ids.generate_id(), 2);
        assert_eq!(ids.generate_id(), 3);
    }

    #[test]
    fn generators_are_independent() {
        let mut a = IdGenerator::new();
        let mut b = IdGenerator::new();
        a.generate_id();
        a.generate_id();
        assert_eq!(b.generate_id(), 1);
    }
}

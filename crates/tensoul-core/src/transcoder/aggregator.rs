use crate::game::Kyoku;

/// Sealed rounds in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RoundLog {
    kyokus: Vec<Kyoku>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kyoku: Kyoku) {
        self.kyokus.push(kyoku);
    }

    pub fn len(&self) -> usize {
        self.kyokus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kyokus.is_empty()
    }

    pub fn into_kyokus(self) -> Vec<Kyoku> {
        self.kyokus
    }
}

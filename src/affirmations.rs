const AFFIRMATIONS: [&str; 12] = [
    "私は価値ある存在です",
    "私は自分の人生をコントロールできます",
    "私は困難を乗り越える力を持っています",
    "私は毎日成長しています",
    "私は愛され、サポートされています",
    "私は自分の目標を達成できます",
    "私は平和で落ち着いた心を持っています",
    "私は自分を信じています",
    "私は前向きなエネルギーに満ちています",
    "私は健康で幸せです",
    "私は自分の感情をコントロールできます",
    "私は素晴らしい未来を創造しています",
];

#[derive(Debug)]
pub struct AffirmationDeck {
    items: Vec<String>,
    index: usize,
}

impl Default for AffirmationDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl AffirmationDeck {
    pub fn new() -> Self {
        Self {
            items: AFFIRMATIONS.iter().map(|item| item.to_string()).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.items[self.index]
    }

    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.items.len();
        &self.items[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::{AffirmationDeck, AFFIRMATIONS};

    #[test]
    fn starts_at_first_affirmation() {
        let deck = AffirmationDeck::new();
        assert_eq!(deck.current(), AFFIRMATIONS[0]);
    }

    #[test]
    fn advance_wraps_around_the_deck() {
        let mut deck = AffirmationDeck::new();
        assert_eq!(deck.advance(), AFFIRMATIONS[1]);

        for _ in 0..AFFIRMATIONS.len() {
            deck.advance();
        }
        assert_eq!(deck.current(), AFFIRMATIONS[1]);
    }
}

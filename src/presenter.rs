use crate::api::types::{Difficulty, UserStats};

pub const PROGRESS_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

const CARD_LABELS: [(Difficulty, &str); 4] = [
    (Difficulty::All, "Overall Submissions"),
    (Difficulty::Easy, "Overall Easy Submissions"),
    (Difficulty::Medium, "Overall Medium Submissions"),
    (Difficulty::Hard, "Overall Hard Submissions"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressIndicator {
    pub difficulty: Difficulty,
    /// `solved / total * 100`; NaN or infinite when the total is zero.
    pub percentage: f64,
    pub label: String,
}

impl ProgressIndicator {
    fn empty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            percentage: 0.0,
            label: "0/0".to_string(),
        }
    }

    fn update(&mut self, solved: u32, total: u32) {
        self.percentage = f64::from(solved) / f64::from(total) * 100.0;
        self.label = format!("{solved}/{total}");
    }

    /// Fill fraction for drawing, always within `0.0..=1.0`.
    pub fn fill_ratio(&self) -> f64 {
        if self.percentage.is_finite() {
            (self.percentage / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u32,
}

pub struct ProgressPresenter {
    pub indicators: [ProgressIndicator; 3],
    pub cards: Vec<StatCard>,
}

impl ProgressPresenter {
    pub fn new() -> Self {
        Self {
            indicators: PROGRESS_DIFFICULTIES.map(ProgressIndicator::empty),
            cards: Vec::new(),
        }
    }

    pub fn render(&mut self, stats: &UserStats) {
        for indicator in &mut self.indicators {
            let bucket = stats.bucket(indicator.difficulty);
            indicator.update(bucket.solved_count, bucket.total_count);
        }

        self.cards = CARD_LABELS
            .iter()
            .map(|&(difficulty, label)| StatCard {
                label,
                value: stats.bucket(difficulty).total_submissions,
            })
            .collect();
    }

    pub fn reset(&mut self) {
        for indicator in &mut self.indicators {
            *indicator = ProgressIndicator::empty(indicator.difficulty);
        }
        self.cards.clear();
    }

    pub fn indicator(&self, difficulty: Difficulty) -> Option<&ProgressIndicator> {
        self.indicators.iter().find(|i| i.difficulty == difficulty)
    }
}

impl Default for ProgressPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::DifficultyBucket;

    fn bucket(total: u32, solved: u32, submissions: u32) -> DifficultyBucket {
        DifficultyBucket {
            total_count: total,
            solved_count: solved,
            total_submissions: submissions,
        }
    }

    fn sample() -> UserStats {
        UserStats {
            username: "alice".to_string(),
            buckets: [
                bucket(3000, 150, 200),
                bucket(800, 100, 120),
                bucket(1500, 40, 60),
                bucket(700, 10, 20),
            ],
        }
    }

    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn renders_labels_and_percentages() {
        let mut p = ProgressPresenter::new();
        p.render(&sample());

        let labels: Vec<_> = p.indicators.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["100/800", "40/1500", "10/700"]);

        let pct: Vec<_> = p.indicators.iter().map(|i| round2(i.percentage)).collect();
        assert_eq!(pct, [12.5, 2.67, 1.43]);
    }

    #[test]
    fn renders_four_cards_in_order() {
        let mut p = ProgressPresenter::new();
        p.render(&sample());

        assert_eq!(
            p.cards,
            vec![
                StatCard { label: "Overall Submissions", value: 200 },
                StatCard { label: "Overall Easy Submissions", value: 120 },
                StatCard { label: "Overall Medium Submissions", value: 60 },
                StatCard { label: "Overall Hard Submissions", value: 20 },
            ]
        );
    }

    #[test]
    fn render_replaces_previous_cards() {
        let mut p = ProgressPresenter::new();
        p.render(&sample());
        p.render(&sample());
        assert_eq!(p.cards.len(), 4);
    }

    #[test]
    fn zero_total_is_tolerated() {
        let mut stats = sample();
        stats.buckets[1] = bucket(0, 0, 0);
        stats.buckets[3] = bucket(0, 5, 0);

        let mut p = ProgressPresenter::new();
        p.render(&stats);

        let easy = p.indicator(Difficulty::Easy).unwrap();
        assert!(easy.percentage.is_nan());
        assert_eq!(easy.fill_ratio(), 0.0);
        assert_eq!(easy.label, "0/0");

        let hard = p.indicator(Difficulty::Hard).unwrap();
        assert!(hard.percentage.is_infinite());
        assert_eq!(hard.fill_ratio(), 0.0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut p = ProgressPresenter::new();
        p.render(&sample());

        for _ in 0..2 {
            p.reset();
            for indicator in &p.indicators {
                assert_eq!(indicator.percentage, 0.0);
                assert_eq!(indicator.label, "0/0");
            }
            assert!(p.cards.is_empty());
        }
    }
}

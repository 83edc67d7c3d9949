use std::fmt;

/// Percentage needed to pass a quiz.
pub const PASS_PERCENTAGE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::A
        } else if percentage >= 80.0 {
            Grade::B
        } else if percentage >= 70.0 {
            Grade::C
        } else if percentage >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_PERCENTAGE
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} correct ({:.0}%), grade {}, {}",
            self.correct,
            self.total,
            self.percentage(),
            self.grade(),
            if self.passed() { "passed" } else { "not passed" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_percentage(100.0), Grade::A);
        assert_eq!(Grade::from_percentage(90.0), Grade::A);
        assert_eq!(Grade::from_percentage(89.9), Grade::B);
        assert_eq!(Grade::from_percentage(80.0), Grade::B);
        assert_eq!(Grade::from_percentage(70.0), Grade::C);
        assert_eq!(Grade::from_percentage(60.0), Grade::D);
        assert_eq!(Grade::from_percentage(59.9), Grade::F);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
    }

    #[test]
    fn test_pass_at_seventy_percent() {
        assert!(QuizScore::new(7, 10).passed());
        assert!(!QuizScore::new(2, 3).passed());
        assert!(QuizScore::new(3, 4).passed());
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let score = QuizScore::default();
        assert_eq!(score.percentage(), 0.0);
        assert_eq!(score.grade(), Grade::F);
        assert!(!score.passed());
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            QuizScore::new(3, 4).to_string(),
            "3 of 4 correct (75%), grade C, passed"
        );
        assert_eq!(
            QuizScore::new(1, 4).to_string(),
            "1 of 4 correct (25%), grade F, not passed"
        );
    }
}

//! Arithmetic question generation for the math game.
//!
//! Operand ranges grow with the level: linearly up to `linear_until_level`,
//! faster beyond it. Multiplication unlocks at `multiply_from_level` and
//! division at `divide_from_level`.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A generated question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathQuestion {
    pub left: u32,
    pub operator: Operator,
    pub right: u32,
    pub answer: i64,
}

impl MathQuestion {
    /// Display form, e.g. `"12 + 7 = ?"`.
    pub fn expression(&self) -> String {
        format!("{} {} {} = ?", self.left, self.operator, self.right)
    }
}

impl fmt::Display for MathQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}

/// Level-scaled question generator with configurable parameters.
#[derive(Debug, Clone)]
pub struct MathQuestionGenerator {
    pub base_max: u32,
    pub linear_until_level: u32,
    pub steep_step: u32,
    pub multiply_from_level: u32,
    pub divide_from_level: u32,
    pub factor_cap: u32,
    pub factor_bonus: u32,
    pub quotient_cap: u32,
    pub quotient_bonus: u32,
    pub divisor_cap: u32,
    pub divisor_bonus: u32,
}

impl Default for MathQuestionGenerator {
    fn default() -> Self {
        Self {
            base_max: 10,
            linear_until_level: 3,
            steep_step: 15,
            multiply_from_level: 3,
            divide_from_level: 5,
            factor_cap: 12,
            factor_bonus: 5,
            quotient_cap: 12,
            quotient_bonus: 3,
            divisor_cap: 10,
            divisor_bonus: 2,
        }
    }
}

impl MathQuestionGenerator {
    /// Generate a question for `level` (0 is treated as 1).
    pub fn generate<R: Rng + ?Sized>(&self, level: u32, rng: &mut R) -> MathQuestion {
        let level = level.max(1);
        let (min, max) = self.operand_range(level);

        let operators = self.operators(level);
        let operator = operators[rng.random_range(0..operators.len())];

        match operator {
            Operator::Add => {
                let left = rng.random_range(min..=max);
                let right = rng.random_range(min..=max);
                MathQuestion {
                    left,
                    operator,
                    right,
                    answer: i64::from(left) + i64::from(right),
                }
            }
            Operator::Subtract => {
                let a = rng.random_range(min..=max);
                let b = rng.random_range(min..=max);
                let (left, right) = if a < b { (b, a) } else { (a, b) };
                MathQuestion {
                    left,
                    operator,
                    right,
                    answer: i64::from(left) - i64::from(right),
                }
            }
            Operator::Multiply => {
                let bound = self.factor_cap.min(level.saturating_add(self.factor_bonus));
                let left = rng.random_range(1..=bound);
                let right = rng.random_range(1..=bound);
                MathQuestion {
                    left,
                    operator,
                    right,
                    answer: i64::from(left) * i64::from(right),
                }
            }
            Operator::Divide => {
                let quotient_bound = self.quotient_cap.min(level.saturating_add(self.quotient_bonus));
                let divisor_bound = self.divisor_cap.min(level.saturating_add(self.divisor_bonus));
                let quotient = rng.random_range(1..=quotient_bound);
                let divisor = rng.random_range(1..=divisor_bound);
                MathQuestion {
                    left: quotient * divisor,
                    operator,
                    right: divisor,
                    answer: i64::from(quotient),
                }
            }
        }
    }

    /// Inclusive operand range for addition and subtraction.
    pub fn operand_range(&self, level: u32) -> (u32, u32) {
        let level = level.max(1);
        let linear = self.base_max.saturating_mul(level);
        let max = if level <= self.linear_until_level {
            linear
        } else {
            linear.saturating_add((level - self.linear_until_level).saturating_mul(self.steep_step))
        };
        let min = if level > 1 { level.saturating_mul(2) } else { 1 };
        (min.min(max), max)
    }

    /// Operators unlocked at `level`.
    pub fn operators(&self, level: u32) -> Vec<Operator> {
        let mut operators = vec![Operator::Add, Operator::Subtract];
        if level >= self.multiply_from_level {
            operators.push(Operator::Multiply);
        }
        if level >= self.divide_from_level {
            operators.push(Operator::Divide);
        }
        operators
    }
}

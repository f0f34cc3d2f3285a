use std::fmt;

/// The player's score. Unclamped: subtracting below zero is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: i64,
}

impl Score {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn add(&mut self, amount: i64) {
        self.value += amount;
    }

    pub fn subtract(&mut self, amount: i64) {
        self.value -= amount;
    }

    pub fn set(&mut self, value: i64) {
        self.value = value;
    }

    pub fn get(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

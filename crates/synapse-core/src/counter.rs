use crate::constants::{COUNTER_DURATION, COUNTER_TICK};
use std::time::Duration;

/// Count-up animation for a statistic such as `250+` or `98%`.
///
/// The value grows by a fixed increment per tick; ticks are derived from
/// elapsed time so a late frame catches up instead of slowing the count.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    plus: bool,
    percent: bool,
    increment: f64,
    tick: Duration,
    done: bool,
}

/// Text to render after an advance, and whether the count has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterAnimation {
    /// Parse a counter from element text. All ASCII digits form the target;
    /// text without a non-zero number is not animated.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with(text, COUNTER_DURATION, COUNTER_TICK)
    }

    pub fn parse_with(text: &str, duration: Duration, tick: Duration) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target: u64 = digits.parse().ok()?;
        if target == 0 || tick.is_zero() {
            return None;
        }
        let ticks = (duration.as_nanos() as f64 / tick.as_nanos() as f64).max(1.0);
        Some(Self {
            target,
            plus: text.contains('+'),
            percent: text.contains('%'),
            increment: target as f64 / ticks,
            tick,
            done: false,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Value after `elapsed` since the count started.
    pub fn advance_to(&mut self, elapsed: Duration) -> CounterFrame {
        let ticks = (elapsed.as_nanos() / self.tick.as_nanos()) as f64;
        let value = self.increment * ticks;
        if value >= self.target as f64 {
            self.done = true;
            CounterFrame {
                text: self.render(self.target),
                done: true,
            }
        } else {
            CounterFrame {
                text: self.render(value.floor() as u64),
                done: false,
            }
        }
    }

    fn render(&self, value: u64) -> String {
        let mut s = value.to_string();
        if self.plus {
            s.push('+');
        }
        if self.percent {
            s.push('%');
        }
        s
    }
}

use chrono::{Local, NaiveDate};

use crate::models::trade::{TradeInput, TradeRecord};

/// Source of "today" for records entered without a date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date. Useful for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Turns raw form input into a finalized [`TradeRecord`].
///
/// Parsing is permissive: text that isn't a number becomes `NaN`, and `NaN`
/// (or a zero buy price) flows through into the derived fields as `"NaN"` or
/// `"Infinity"` instead of failing. Callers wanting strict input must check
/// before calling [`finalize`](Self::finalize).
pub struct TradeCalculator {
    clock: Box<dyn Clock>,
}

impl TradeCalculator {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Build the record for `input`. Pure apart from reading the clock.
    pub fn finalize(&self, input: &TradeInput) -> TradeRecord {
        let buy = parse_number(&input.buy);
        let sell = parse_number(&input.sell);
        let qty = parse_number(&input.qty);

        let date = if input.date.is_empty() {
            self.clock.today().format("%Y-%m-%d").to_string()
        } else {
            input.date.clone()
        };

        TradeRecord {
            date,
            asset: input.asset.clone(),
            buy,
            sell,
            qty,
            profit: format_fixed2(profit(buy, sell, qty)),
            change: format_fixed2(percent_change(buy, sell)),
            notes: input.notes.clone(),
        }
    }
}

impl Default for TradeCalculator {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl std::fmt::Debug for TradeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeCalculator")
            .field("today", &self.clock.today())
            .finish()
    }
}

/// Absolute profit of a trade: `(sell - buy) * qty`.
#[must_use]
pub fn profit(buy: f64, sell: f64, qty: f64) -> f64 {
    (sell - buy) * qty
}

/// Percentage return of a trade: `((sell / buy) - 1) * 100`.
/// Not finite when `buy` is zero.
#[must_use]
pub fn percent_change(buy: f64, sell: f64) -> f64 {
    ((sell / buy) - 1.0) * 100.0
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, forms like `.5` and `5.`,
/// and `[+-]Infinity`. Trailing garbage is ignored (`"12abc"` is `12`).
/// Returns `NaN` when no numeric prefix exists.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Format with exactly two decimals.
///
/// Exact ties round away from zero (`0.125` → `"0.13"`), negative zero prints
/// as `"0.00"`, and non-finite values print as `"NaN"`, `"Infinity"` or
/// `"-Infinity"`. Magnitudes of `1e21` and above fall back to the shortest
/// exponent form (`"1e+21"`, `"-1.5e+22"`), with no fixed decimals.
#[must_use]
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 {
        return exponent_form(value);
    }

    let rounded = if is_hundredths_tie(magnitude) {
        (magnitude * 100.0).ceil() / 100.0
    } else {
        magnitude
    };

    let text = format!("{rounded:.2}");
    if value < 0.0 {
        format!("-{text}")
    } else {
        text
    }
}

/// Shortest round-trip digits in `d.ddde+XX` form. Only used for huge values,
/// so the exponent is always positive.
fn exponent_form(value: f64) -> String {
    format!("{value:e}").replacen('e', "e+", 1)
}

/// A binary float sits exactly halfway between two hundredths only when it is
/// an odd multiple of 1/8 (0.125, 0.375, ...). Everything else already rounds
/// to the nearest hundredth without ambiguity.
fn is_hundredths_tie(magnitude: f64) -> bool {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    let eighths = magnitude * 8.0;
    eighths < EXACT_LIMIT && eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

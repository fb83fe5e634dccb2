//! First-match-wins message selection for the counter display.

/// Message shown after an increment lands on `count`.
///
/// Rule order is load-bearing: the exact-value arms sit below the
/// threshold chain, so they only fire for values the thresholds let
/// through (50 and 100). Everything in 20..=49, 51..=99 and above 100
/// falls to the default arm.
pub fn message_for_count(count: i64) -> String {
    if count == 0 {
        "count is zero".to_string()
    } else if count < 5 {
        format!("count: {} - still early!", count)
    } else if count < 10 {
        format!("count: {} - good pace!", count)
    } else if count < 20 {
        format!("count: {} - impressive!", count)
    } else if count == 50 {
        "🎉 reached 50! congratulations!".to_string()
    } else if count == 100 {
        "🏆 reached 100! excellent!".to_string()
    } else {
        format!("count: {} - keep it up!", count)
    }
}

/// Message shown after `set_count` lands on `value`.
pub fn custom_message(value: i64) -> String {
    if value == 0 {
        "counter set to 0".to_string()
    } else if value == 42 {
        "42 - the answer to life, the universe, and everything!".to_string()
    } else if value == 100 {
        "100 - a perfect number!".to_string()
    } else if value > 1000 {
        format!("{} - that's a very large number!", value)
    } else {
        format!("counter set to {}", value)
    }
}

/// Message shown after a batch increment lands on `new_count`.
pub fn batch_message(new_count: i64) -> String {
    format!("incremented by 10 at once! now: {}", new_count)
}

//! Escalating labels for the negative control and the matching growth of the
//! affirmative one. Both are pure functions of the evasion count.

pub const NEGATIVE_LADDER: [&str; 6] = [
    "No",
    "Are you sure?",
    "Really??",
    "Think again!",
    "Last chance!",
    "You can't say No! ❤️",
];

const AFFIRMATIVE_BASE_REM: f32 = 1.1;
const AFFIRMATIVE_STEP_REM: f32 = 0.05;

pub fn negative_label(evasion_count: u32) -> &'static str {
    let index = (evasion_count as usize).min(NEGATIVE_LADDER.len() - 1);
    NEGATIVE_LADDER[index]
}

pub fn affirmative_font_rem(evasion_count: u32) -> f32 {
    AFFIRMATIVE_BASE_REM + AFFIRMATIVE_STEP_REM * evasion_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_starts_at_no_and_saturates_on_final_phrase() {
        assert_eq!(negative_label(0), "No");
        assert_eq!(negative_label(3), "Think again!");
        for count in 5..40 {
            assert_eq!(negative_label(count), "You can't say No! ❤️");
        }
    }

    #[test]
    fn affirmative_font_grows_linearly() {
        assert!((affirmative_font_rem(0) - 1.1).abs() < 1e-6);
        assert!((affirmative_font_rem(4) - 1.3).abs() < 1e-6);
        assert!((affirmative_font_rem(10) - 1.6).abs() < 1e-6);
    }
}

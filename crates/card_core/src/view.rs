use serde::{Deserialize, Serialize};

use crate::domain::{EvasionPosition, SpringTransition};

/// Personalised text shown on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCopy {
    pub recipient: String,
    pub window_title: String,
    pub headline: String,
    pub affirmative_label: String,
    pub celebration_heading: String,
    pub celebration_message: String,
    pub envelope_hint: String,
    pub letter_salutation: String,
    pub letter_paragraphs: Vec<String>,
    pub letter_signature: String,
    pub close_label: String,
}

impl CardCopy {
    pub fn for_recipient(recipient: impl Into<String>) -> Self {
        let recipient = recipient.into();
        Self {
            window_title: format!("For My Valentine {recipient}"),
            headline: format!("{recipient}, will you be my Valentine?"),
            affirmative_label: "Yes".to_string(),
            celebration_heading: "Yaaaaay! ❤️".to_string(),
            celebration_message: format!("I knew you'd say yes, {recipient}!"),
            envelope_hint: "A secret message for you... (Click)".to_string(),
            letter_salutation: format!("Dearest {recipient},"),
            letter_paragraphs: vec![
                "From the moment I met you, my world became so much brighter. Your smile is my \
                 favorite thing, and your heart is the most beautiful part of you."
                    .to_string(),
                "Thank you for saying Yes! I promise to make this Valentine's Day as special and \
                 wonderful as you are."
                    .to_string(),
            ],
            letter_signature: "Forever Yours ❤️".to_string(),
            close_label: "Close".to_string(),
            recipient,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.letter_signature = signature.into();
        self
    }
}

impl Default for CardCopy {
    fn default() -> Self {
        Self::for_recipient("Lucia")
    }
}

/// Everything the presentation layer needs to draw one frame of the card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub sparkling: bool,
    #[serde(flatten)]
    pub panel: CardPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum CardPanel {
    Asking {
        headline: String,
        affirmative_label: String,
        affirmative_font_rem: f32,
        negative_label: String,
        negative_position: EvasionPosition,
        negative_interactive: bool,
        transition: SpringTransition,
    },
    Celebrating {
        heading: String,
        message: String,
        envelope_hint: String,
    },
    Letter {
        salutation: String,
        paragraphs: Vec<String>,
        signature: String,
        close_label: String,
    },
}

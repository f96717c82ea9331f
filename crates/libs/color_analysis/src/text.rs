//! Display text for color names and suggestions.
//!
//! Classification and the combination rules only deal in enums; everything a user reads is
//! looked up here per [`Locale`].

use crate::combinations::{Mood, Staple, Suggestion};
use crate::{ColorCategory, ColorName};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

#[must_use]
pub const fn color_label(name: ColorName, locale: Locale) -> &'static str {
    match locale {
        Locale::En => match name {
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Brown => "brown",
            ColorName::Yellow => "yellow",
            ColorName::YellowGreen => "yellow-green",
            ColorName::Green => "green",
            ColorName::Teal => "teal",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Black => "black",
            ColorName::White => "white",
            ColorName::Gray => "gray",
            ColorName::Beige => "beige",
            ColorName::Pink => "pink",
            ColorName::Other => "other",
        },
        Locale::Ja => match name {
            ColorName::Red => "赤",
            ColorName::Orange => "オレンジ",
            ColorName::Brown => "茶",
            ColorName::Yellow => "黄",
            ColorName::YellowGreen => "黄緑",
            ColorName::Green => "緑",
            ColorName::Teal => "青緑",
            ColorName::Blue => "青",
            ColorName::Purple => "紫",
            ColorName::Black => "黒",
            ColorName::White => "白",
            ColorName::Gray => "グレー",
            ColorName::Beige => "ベージュ",
            ColorName::Pink => "ピンク",
            ColorName::Other => "その他",
        },
    }
}

#[must_use]
pub const fn category_label(category: ColorCategory, locale: Locale) -> &'static str {
    match (locale, category) {
        (Locale::En, ColorCategory::Neutral) => "neutral",
        (Locale::En, ColorCategory::Warm) => "warm",
        (Locale::En, ColorCategory::Cool) => "cool",
        (Locale::En, ColorCategory::Other) => "other",
        (Locale::Ja, ColorCategory::Neutral) => "ニュートラル",
        (Locale::Ja, ColorCategory::Warm) => "暖色",
        (Locale::Ja, ColorCategory::Cool) => "寒色",
        (Locale::Ja, ColorCategory::Other) => "その他",
    }
}

#[must_use]
pub const fn success_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "The image was uploaded, its main colors were extracted and classified, and color combinations were suggested!"
        }
        Locale::Ja => {
            "画像が正常にアップロードされ、主要な色が抽出・分類され、色の組み合わせが提案されました！"
        }
    }
}

#[must_use]
pub const fn invalid_image_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Failed to read the image. Please upload a valid image file.",
        Locale::Ja => "画像の読み込みに失敗しました。有効な画像ファイルをアップロードしてください。",
    }
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[must_use]
pub fn render_suggestion(suggestion: &Suggestion, locale: Locale) -> String {
    match locale {
        Locale::En => render_en(suggestion),
        Locale::Ja => render_ja(suggestion),
    }
}

fn render_en(suggestion: &Suggestion) -> String {
    let label = |name| color_label(name, Locale::En);
    match *suggestion {
        Suggestion::NoColorsDetected => "No colors could be detected in the image.".to_string(),
        Suggestion::NeutralPairing { main } => format!(
            "{} goes well with neutral colors such as white, black and gray.",
            capitalized(label(main))
        ),
        Suggestion::Analogous {
            main,
            companions: [first, second],
        } => {
            let (first, second) = (label(first), label(second));
            match main {
                ColorName::Red => format!(
                    "For {}, building a gradient with analogous colors like {first} and {second} is also recommended.",
                    label(main)
                ),
                ColorName::Yellow => format!(
                    "Analogous colors like {first} and {second} give {} a bright impression.",
                    label(main)
                ),
                ColorName::Green => format!(
                    "Analogous colors like {first} and {second} give {} a natural impression.",
                    label(main)
                ),
                _ => format!(
                    "{} looks unified with analogous colors like {first} and {second}.",
                    capitalized(label(main))
                ),
            }
        }
        Suggestion::Complementary { main, accent } => format!(
            "{} can take {} as an accent color for a playful contrast.",
            capitalized(label(main)),
            label(accent)
        ),
        Suggestion::Mood { mood: Mood::Warm } => {
            "Warm colors give a warm and friendly impression.".to_string()
        }
        Suggestion::Mood { mood: Mood::Cool } => {
            "Cool colors give a cool and calm impression.".to_string()
        }
        Suggestion::Remark { staple } => match staple {
            Staple::Black => "Black is a versatile color that is easy to match with anything.",
            Staple::White => "White looks clean and makes other colors stand out.",
            Staple::Gray => "Gray looks refined and sophisticated and goes with any color.",
            Staple::Beige => {
                "Beige gives a natural, gentle impression and is ideal for office styles."
            }
        }
        .to_string(),
        Suggestion::NeutralWithAccent { main, secondary } => format!(
            "Combining {} with {} looks modern and well balanced.",
            label(main),
            label(secondary)
        ),
        Suggestion::AccentWithNeutral { main, secondary } => format!(
            "Pairing {} with {} makes the main color stand out.",
            label(main),
            label(secondary)
        ),
        Suggestion::NoSpecificSuggestion => {
            "There are no specific suggestions for this color combination.".to_string()
        }
    }
}

fn render_ja(suggestion: &Suggestion) -> String {
    let label = |name| color_label(name, Locale::Ja);
    match *suggestion {
        Suggestion::NoColorsDetected => "画像から色を検出できませんでした。".to_string(),
        Suggestion::NeutralPairing { main } => format!(
            "{}には、白、黒、グレーなどのニュートラルカラーがよく合います。",
            label(main)
        ),
        Suggestion::Analogous {
            main,
            companions: [first, second],
        } => {
            let ending = match main {
                ColorName::Red => "グラデーションを作るのもおすすめです。",
                ColorName::Yellow => "明るい印象に。",
                ColorName::Green => "自然な印象に。",
                _ => "統一感を出すと良いでしょう。",
            };
            format!(
                "{}には、{}や{}などの類似色で{ending}",
                label(main),
                label(first),
                label(second)
            )
        }
        Suggestion::Complementary { main, accent } => format!(
            "{}には、{}を差し色にしてコントラストを楽しむこともできます。",
            label(main),
            label(accent)
        ),
        Suggestion::Mood { mood: Mood::Warm } => {
            "暖色系の色は、暖かみがあり親しみやすい印象を与えます。".to_string()
        }
        Suggestion::Mood { mood: Mood::Cool } => {
            "寒色系の色は、クールで落ち着いた印象を与えます。".to_string()
        }
        Suggestion::Remark { staple } => match staple {
            Staple::Black => "黒はどんな色とも合わせやすい万能カラーです。",
            Staple::White => "白は清潔感があり、他の色を引き立てます。",
            Staple::Gray => "グレーは上品で洗練された印象を与え、どんな色とも相性が良いです。",
            Staple::Beige => {
                "ベージュはナチュラルで優しい印象を与え、オフィススタイルにも最適です。"
            }
        }
        .to_string(),
        Suggestion::NeutralWithAccent { main, secondary } => format!(
            "{}と{}の組み合わせは、モダンでバランスが良いでしょう。",
            label(main),
            label(secondary)
        ),
        Suggestion::AccentWithNeutral { main, secondary } => format!(
            "{}に{}を合わせると、メインの色が引き立ちます。",
            label(main),
            label(secondary)
        ),
        Suggestion::NoSpecificSuggestion => {
            "この色の組み合わせについては、特別な提案はありません。".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parses_from_lowercase() -> color_eyre::Result<()> {
        let locale: Locale = serde_json::from_str("\"ja\"")?;
        assert_eq!(locale, Locale::Ja);
        assert_eq!(Locale::default(), Locale::En);
        Ok(())
    }

    #[test]
    fn test_labels_are_distinct_per_locale() {
        for locale in [Locale::En, Locale::Ja] {
            let mut labels: Vec<&str> = ColorName::ALL
                .iter()
                .map(|name| color_label(*name, locale))
                .collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), ColorName::ALL.len());
        }
    }

    #[test]
    fn test_category_labels_follow_classified_names() {
        use crate::combinations::category_of;

        assert_eq!(category_label(category_of(ColorName::Red), Locale::En), "warm");
        assert_eq!(category_label(category_of(ColorName::Red), Locale::Ja), "暖色");
        assert_eq!(category_label(category_of(ColorName::White), Locale::Ja), "ニュートラル");
        assert_eq!(category_label(category_of(ColorName::Teal), Locale::En), "cool");
    }

    #[test]
    fn test_japanese_analogous_text() {
        let red = Suggestion::Analogous {
            main: ColorName::Red,
            companions: [ColorName::Pink, ColorName::Orange],
        };
        assert_eq!(
            render_suggestion(&red, Locale::Ja),
            "赤には、ピンクやオレンジなどの類似色でグラデーションを作るのもおすすめです。"
        );

        let blue = Suggestion::Analogous {
            main: ColorName::Blue,
            companions: [ColorName::Teal, ColorName::Purple],
        };
        assert_eq!(
            render_suggestion(&blue, Locale::Ja),
            "青には、青緑や紫などの類似色で統一感を出すと良いでしょう。"
        );
    }

    #[test]
    fn test_english_sentences_start_capitalized() {
        let text = render_suggestion(
            &Suggestion::NeutralPairing {
                main: ColorName::YellowGreen,
            },
            Locale::En,
        );
        assert!(text.starts_with("Yellow-green goes well"));

        let text = render_suggestion(
            &Suggestion::Complementary {
                main: ColorName::Brown,
                accent: ColorName::Teal,
            },
            Locale::En,
        );
        assert_eq!(
            text,
            "Brown can take teal as an accent color for a playful contrast."
        );
    }

    #[test]
    fn test_pairing_direction_changes_wording() {
        let neutral_first = render_suggestion(
            &Suggestion::NeutralWithAccent {
                main: ColorName::Black,
                secondary: ColorName::Red,
            },
            Locale::Ja,
        );
        let accent_first = render_suggestion(
            &Suggestion::AccentWithNeutral {
                main: ColorName::Red,
                secondary: ColorName::Black,
            },
            Locale::Ja,
        );
        assert_eq!(
            neutral_first,
            "黒と赤の組み合わせは、モダンでバランスが良いでしょう。"
        );
        assert_eq!(accent_first, "赤に黒を合わせると、メインの色が引き立ちます。");
    }
}

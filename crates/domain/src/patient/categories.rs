//! Human-readable categories and the numeric codes the model was trained on.

use serde::{Deserialize, Serialize};

/// A categorical input with a fixed label → code table.
pub trait Category: Sized + Copy + 'static {
    /// Every accepted variant, in code order.
    const ALL: &'static [Self];

    /// The label clients send.
    fn label(self) -> &'static str;

    /// The numeric code fed to the model.
    fn code(self) -> u8;

    /// Looks up a variant by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Category for Gender {
    const ALL: &'static [Self] = &[Gender::Female, Gender::Male];

    fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }
}

/// Three-step level used for cholesterol and glucose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Normal,
    #[serde(rename = "Border-Line")]
    BorderLine,
    High,
}

impl Category for Level {
    const ALL: &'static [Self] = &[Level::Normal, Level::BorderLine, Level::High];

    fn label(self) -> &'static str {
        match self {
            Level::Normal => "Normal",
            Level::BorderLine => "Border-Line",
            Level::High => "High",
        }
    }

    fn code(self) -> u8 {
        match self {
            Level::Normal => 1,
            Level::BorderLine => 2,
            Level::High => 3,
        }
    }
}

/// Yes/no answer used for smoking, alcohol and physical activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl Category for YesNo {
    const ALL: &'static [Self] = &[YesNo::No, YesNo::Yes];

    fn label(self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    fn code(self) -> u8 {
        match self {
            YesNo::No => 0,
            YesNo::Yes => 1,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes() {
        assert_eq!(Gender::from_label("Male").map(Category::code), Some(1));
        assert_eq!(Gender::from_label("Female").map(Category::code), Some(0));
        assert_eq!(Gender::from_label("Other"), None);
    }

    #[test]
    fn level_codes() {
        assert_eq!(Level::from_label("Normal").map(Category::code), Some(1));
        assert_eq!(Level::from_label("Border-Line").map(Category::code), Some(2));
        assert_eq!(Level::from_label("High").map(Category::code), Some(3));
        assert_eq!(Level::from_label("BorderLine"), None);
    }

    #[test]
    fn yes_no_codes() {
        assert_eq!(YesNo::from_label("Yes").map(Category::code), Some(1));
        assert_eq!(YesNo::from_label("No").map(Category::code), Some(0));
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(Gender::from_label("male"), None);
        assert_eq!(YesNo::from_label("YES"), None);
    }

    #[test]
    fn serde_uses_client_labels() {
        let json = serde_json::to_string(&Level::BorderLine).unwrap();
        assert_eq!(json, "\"Border-Line\"");
        for level in Level::ALL {
            assert_eq!(
                serde_json::to_value(level).unwrap(),
                serde_json::Value::from(level.label())
            );
        }
    }
}

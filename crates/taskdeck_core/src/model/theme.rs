//! Display theme.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable string stored in the `theme` slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Reads a stored value; anything but `dark` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn stored_values_fall_back_to_light() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("\"dark\"")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}

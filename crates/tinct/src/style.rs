use crate::code::{BgColor, Code, Color, Effect, Reset, Sgr};

/// A terminal style.
///
/// A terminal style comprises a reset flag, a text effect, a foreground color,
/// and a background color. The latter three are optional and a style holds at
/// most one value for each. If nothing is set, the style is empty and writes
/// no escape sequences at all. Since styles are small `Copy` values, they can
/// be freely reused.
///
/// Styles are composed with [`Style::combine`] or, equivalently, `+`. The
/// composition folds from left to right: A later effect or color replaces an
/// earlier one of the same category, whereas a later reset discards
/// everything before it. Categories set *after* a reset are retained.
///
/// # Example
///
/// ```
/// # use tinct::{BgColor, Color, Effect, Reset, Style};
/// let style = Color::Red + Effect::Bold + BgColor::Blue + Color::Green;
/// assert_eq!(format!("{}", style), "\x1b[1;32;44m");
///
/// let style = Color::Red + Reset + Effect::Italic;
/// assert_eq!(format!("{}", style), "\x1b[0m\x1b[3m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    reset: bool,
    effect: Option<Effect>,
    color: Option<Color>,
    bgcolor: Option<BgColor>,
}

impl Style {
    /// Create a new empty style.
    pub const fn new() -> Self {
        Self {
            reset: false,
            effect: None,
            color: None,
            bgcolor: None,
        }
    }

    /// Create a new style that only resets.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            ..Self::new()
        }
    }

    /// Create a new style with the given effect.
    #[must_use]
    pub const fn with_effect(&self, effect: Effect) -> Self {
        Self {
            effect: Some(effect),
            ..*self
        }
    }

    /// Create a new style with the given foreground color.
    #[must_use]
    pub const fn with_color(&self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..*self
        }
    }

    /// Create a new style with the given background color.
    #[must_use]
    pub const fn with_bgcolor(&self, bgcolor: BgColor) -> Self {
        Self {
            bgcolor: Some(bgcolor),
            ..*self
        }
    }

    /// Combine this style with another style.
    ///
    /// If the other style resets, the result is the other style. Otherwise,
    /// each effect or color set in the other style replaces this style's
    /// value for the same category.
    #[must_use]
    pub fn combine(self, other: impl Into<Style>) -> Self {
        let other = other.into();
        if other.reset {
            return other;
        }

        Self {
            reset: self.reset,
            effect: other.effect.or(self.effect),
            color: other.color.or(self.color),
            bgcolor: other.bgcolor.or(self.bgcolor),
        }
    }

    /// Replace this style with the style for the given code.
    pub fn assign(&mut self, code: impl Into<Style>) {
        *self = code.into();
    }

    /// Set the reset flag, clearing the effect and both colors.
    pub fn set_reset(&mut self) {
        *self = Self::reset();
    }

    /// Clear the reset flag.
    pub fn unset_reset(&mut self) {
        self.reset = false;
    }

    /// Set the effect.
    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = Some(effect);
    }

    /// Clear the effect.
    pub fn unset_effect(&mut self) {
        self.effect = None;
    }

    /// Set the foreground color.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Clear the foreground color.
    pub fn unset_color(&mut self) {
        self.color = None;
    }

    /// Set the background color.
    pub fn set_bgcolor(&mut self, bgcolor: BgColor) {
        self.bgcolor = Some(bgcolor);
    }

    /// Clear the background color.
    pub fn unset_bgcolor(&mut self) {
        self.bgcolor = None;
    }

    /// Determine whether this style resets.
    pub const fn has_reset(&self) -> bool {
        self.reset
    }

    /// Get this style's effect.
    pub const fn effect(&self) -> Option<Effect> {
        self.effect
    }

    /// Get this style's foreground color.
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Get this style's background color.
    pub const fn bgcolor(&self) -> Option<BgColor> {
        self.bgcolor
    }

    /// Determine whether this style is empty, i.e., writes nothing.
    pub const fn is_empty(&self) -> bool {
        !self.reset && self.effect.is_none() && self.color.is_none() && self.bgcolor.is_none()
    }

    /// Get an iterator over the parameters of the combined escape sequence.
    ///
    /// The parameters are in fixed order: effect, foreground color, background
    /// color. The reset flag does not contribute since it is written as a
    /// separate escape sequence.
    pub fn params(&self) -> impl Iterator<Item = u8> {
        self.effect
            .map(|e| e.param())
            .into_iter()
            .chain(self.color.map(|c| c.param()))
            .chain(self.bgcolor.map(|c| c.param()))
    }
}

impl core::fmt::Display for Style {
    /// Write this style's escape sequences.
    ///
    /// A style writes at most two sequences, first `\x1b[0m` if it resets and
    /// then one sequence combining effect and colors if any are set.
    /// Formatting flags such as width and fill are ignored.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.reset {
            f.write_str("\x1b[")?;
            Reset.write_param(f)?;
            f.write_str("m")?;
        }

        let mut params = self.params();
        if let Some(first) = params.next() {
            write!(f, "\x1b[{}", first)?;
            for param in params {
                write!(f, ";{}", param)?;
            }
            f.write_str("m")?;
        }

        Ok(())
    }
}

// ----------------------------------------------------------------------------------------------------------

impl From<Reset> for Style {
    fn from(_: Reset) -> Self {
        Self::reset()
    }
}

impl From<Effect> for Style {
    fn from(value: Effect) -> Self {
        Self::new().with_effect(value)
    }
}

impl From<Color> for Style {
    fn from(value: Color) -> Self {
        Self::new().with_color(value)
    }
}

impl From<BgColor> for Style {
    fn from(value: BgColor) -> Self {
        Self::new().with_bgcolor(value)
    }
}

impl From<Code> for Style {
    fn from(value: Code) -> Self {
        match value {
            Code::Reset => Self::reset(),
            Code::Effect(effect) => effect.into(),
            Code::Color(color) => color.into(),
            Code::BgColor(bgcolor) => bgcolor.into(),
        }
    }
}

impl<S: Into<Style>> core::ops::Add<S> for Style {
    type Output = Style;

    fn add(self, rhs: S) -> Self::Output {
        self.combine(rhs)
    }
}

impl<S: Into<Style>> core::ops::AddAssign<S> for Style {
    fn add_assign(&mut self, rhs: S) {
        *self = self.combine(rhs);
    }
}

macro_rules! add_code {
    ($code:ty) => {
        impl<S: Into<Style>> core::ops::Add<S> for $code {
            type Output = Style;

            fn add(self, rhs: S) -> Self::Output {
                Style::from(self).combine(rhs)
            }
        }
    };
}

add_code!(Reset);
add_code!(Effect);
add_code!(Color);
add_code!(BgColor);
add_code!(Code);

// ==========================================================================================================

//! The catalog of supported SGR codes.
//!
//! Codes fall into four mutually exclusive kinds, [`Reset`], [`Effect`],
//! foreground [`Color`], and background [`BgColor`]. Each code's discriminant
//! is its SGR parameter, so that displaying a code writes the complete escape
//! sequence, e.g., `\x1b[31m` for [`Color::Red`]. [`Code`] wraps any one code
//! regardless of kind.

/// A select-graphic-rendition code.
///
/// To facilitate composition, SGR codes implement [`Sgr::write_param`], which
/// writes the parameter only, without the leading `CSI` and trailing `m`.
/// That way, several codes can share one escape sequence.
///
/// This trait is object-safe.
pub trait Sgr: core::fmt::Debug + core::fmt::Display {
    /// Get the SGR parameter.
    fn param(&self) -> u8;

    /// Write the parameter for this SGR code.
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(out, "{}", self.param())
    }
}

macro_rules! implement_sgr {
    ($name:ident) => {
        impl Sgr for $name {
            #[inline]
            fn param(&self) -> u8 {
                $name::param(self)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("\x1b[")?;
                self.write_param(f)?;
                f.write_str("m")
            }
        }
    };
}

// ----------------------------------------------------------------------------------------------------------

/// The code clearing all styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reset;

impl Reset {
    /// Get the SGR parameter.
    pub const fn param(&self) -> u8 {
        0
    }
}

implement_sgr!(Reset);

// ----------------------------------------------------------------------------------------------------------

/// A text effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Effect {
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,
    RapidBlink = 6,
    ReverseVideo = 7,
    Conceal = 8,
    Crossout = 9,
}

impl Effect {
    /// All effects in SGR parameter order.
    pub const ALL: [Effect; 9] = [
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::RapidBlink,
        Self::ReverseVideo,
        Self::Conceal,
        Self::Crossout,
    ];

    /// Get the SGR parameter.
    pub const fn param(&self) -> u8 {
        *self as u8
    }

    /// Get a human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::RapidBlink => "rapid blink",
            Self::ReverseVideo => "reverse video",
            Self::Conceal => "conceal",
            Self::Crossout => "crossout",
        }
    }
}

implement_sgr!(Effect);

// ----------------------------------------------------------------------------------------------------------

macro_rules! define_color {
    (
        $(#[$attr:meta])*
        $name:ident, $other:ident, $switch:ident, $base:literal, $bright:literal
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            Black = $base,
            Red = $base + 1,
            Green = $base + 2,
            Yellow = $base + 3,
            Blue = $base + 4,
            Magenta = $base + 5,
            Cyan = $base + 6,
            Gray = $base + 7,
            /// The terminal's default color.
            Default = $base + 9,
            BrightBlack = $bright,
            BrightRed = $bright + 1,
            BrightGreen = $bright + 2,
            BrightYellow = $bright + 3,
            BrightBlue = $bright + 4,
            BrightMagenta = $bright + 5,
            BrightCyan = $bright + 6,
            BrightGray = $bright + 7,
        }

        impl $name {
            /// All colors in SGR parameter order.
            pub const ALL: [$name; 17] = [
                Self::Black,
                Self::Red,
                Self::Green,
                Self::Yellow,
                Self::Blue,
                Self::Magenta,
                Self::Cyan,
                Self::Gray,
                Self::Default,
                Self::BrightBlack,
                Self::BrightRed,
                Self::BrightGreen,
                Self::BrightYellow,
                Self::BrightBlue,
                Self::BrightMagenta,
                Self::BrightCyan,
                Self::BrightGray,
            ];

            /// Get the SGR parameter.
            pub const fn param(&self) -> u8 {
                *self as u8
            }

            /// Determine whether this color is the terminal's default color.
            pub const fn is_default(&self) -> bool {
                matches!(*self, Self::Default)
            }

            /// Determine whether this color is one of the eight bright colors.
            pub const fn is_bright(&self) -> bool {
                self.param() >= $bright
            }

            /// Get the bright version of this color.
            ///
            /// Bright colors and the default color are returned as is.
            #[must_use]
            pub const fn bright(&self) -> Self {
                match *self {
                    Self::Black => Self::BrightBlack,
                    Self::Red => Self::BrightRed,
                    Self::Green => Self::BrightGreen,
                    Self::Yellow => Self::BrightYellow,
                    Self::Blue => Self::BrightBlue,
                    Self::Magenta => Self::BrightMagenta,
                    Self::Cyan => Self::BrightCyan,
                    Self::Gray => Self::BrightGray,
                    other => other,
                }
            }

            /// Get the same color for the other layer.
            pub const fn $switch(&self) -> $other {
                match *self {
                    Self::Black => $other::Black,
                    Self::Red => $other::Red,
                    Self::Green => $other::Green,
                    Self::Yellow => $other::Yellow,
                    Self::Blue => $other::Blue,
                    Self::Magenta => $other::Magenta,
                    Self::Cyan => $other::Cyan,
                    Self::Gray => $other::Gray,
                    Self::Default => $other::Default,
                    Self::BrightBlack => $other::BrightBlack,
                    Self::BrightRed => $other::BrightRed,
                    Self::BrightGreen => $other::BrightGreen,
                    Self::BrightYellow => $other::BrightYellow,
                    Self::BrightBlue => $other::BrightBlue,
                    Self::BrightMagenta => $other::BrightMagenta,
                    Self::BrightCyan => $other::BrightCyan,
                    Self::BrightGray => $other::BrightGray,
                }
            }
        }

        implement_sgr!($name);
    };
}

define_color!(
    /// A foreground color.
    ///
    /// [`Color::Default`] restores the terminal's default foreground color.
    Color, BgColor, background, 30, 90
);

define_color!(
    /// A background color.
    ///
    /// [`BgColor::Default`] restores the terminal's default background color.
    BgColor, Color, foreground, 40, 100
);

// ----------------------------------------------------------------------------------------------------------

/// Any one SGR code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    Reset,
    Effect(Effect),
    Color(Color),
    BgColor(BgColor),
}

impl Code {
    /// Get the SGR parameter.
    pub const fn param(&self) -> u8 {
        match *self {
            Self::Reset => Reset.param(),
            Self::Effect(effect) => effect.param(),
            Self::Color(color) => color.param(),
            Self::BgColor(color) => color.param(),
        }
    }
}

implement_sgr!(Code);

impl From<Reset> for Code {
    fn from(_: Reset) -> Self {
        Self::Reset
    }
}

impl From<Effect> for Code {
    fn from(value: Effect) -> Self {
        Self::Effect(value)
    }
}

impl From<Color> for Code {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<BgColor> for Code {
    fn from(value: BgColor) -> Self {
        Self::BgColor(value)
    }
}

// ==========================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_params() {
        assert_eq!(Reset.param(), 0);
        assert_eq!(
            Effect::ALL.iter().map(Effect::param).collect::<Vec<_>>(),
            (1..=9).collect::<Vec<_>>()
        );

        assert_eq!(Color::Black.param(), 30);
        assert_eq!(Color::Gray.param(), 37);
        assert_eq!(Color::Default.param(), 39);
        assert_eq!(Color::BrightBlack.param(), 90);
        assert_eq!(Color::BrightGray.param(), 97);

        assert_eq!(BgColor::Black.param(), 40);
        assert_eq!(BgColor::Gray.param(), 47);
        assert_eq!(BgColor::Default.param(), 49);
        assert_eq!(BgColor::BrightBlack.param(), 100);
        assert_eq!(BgColor::BrightGray.param(), 107);

        for (index, color) in Color::ALL.iter().enumerate().take(8) {
            assert_eq!(color.param() as usize, 30 + index);
            assert_eq!(color.bright().param() as usize, 90 + index);
            assert_eq!(color.background().param() as usize, 40 + index);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Reset), "\x1b[0m");
        assert_eq!(format!("{}", Effect::Bold), "\x1b[1m");
        assert_eq!(format!("{}", Effect::Crossout), "\x1b[9m");
        assert_eq!(format!("{}", Color::Red), "\x1b[31m");
        assert_eq!(format!("{}", Color::Default), "\x1b[39m");
        assert_eq!(format!("{}", BgColor::BrightCyan), "\x1b[106m");
        assert_eq!(format!("{}", BgColor::Default), "\x1b[49m");
        assert_eq!(format!("{}", Code::Reset), "\x1b[0m");
        assert_eq!(format!("{}", Code::from(Color::Blue)), "\x1b[34m");

        // Width and fill do not apply to escape sequences.
        assert_eq!(format!("{:>8}", Color::Red), "\x1b[31m");
        assert_eq!(format!("{:*<6}", Reset), "\x1b[0m");
    }

    #[test]
    fn test_color_helpers() {
        assert!(Color::Default.is_default());
        assert!(!Color::Black.is_default());
        assert!(Color::BrightRed.is_bright());
        assert!(!Color::Red.is_bright());
        assert!(!BgColor::Default.is_bright());
        assert!(BgColor::BrightBlue.is_bright());

        assert_eq!(Color::Default.bright(), Color::Default);
        assert_eq!(Color::BrightCyan.bright(), Color::BrightCyan);
        assert_eq!(BgColor::Magenta.bright(), BgColor::BrightMagenta);

        for color in Color::ALL {
            assert_eq!(color.background().foreground(), color);
            assert_eq!(color.background().param(), color.param() + 10);
        }
    }

    #[test]
    fn test_code() {
        assert_eq!(Code::from(Reset), Code::Reset);
        assert_eq!(Code::from(Effect::Dim).param(), 2);
        assert_eq!(Code::from(BgColor::Green).param(), 42);
        assert_eq!(Code::Color(Color::BrightYellow).param(), 93);
    }
}

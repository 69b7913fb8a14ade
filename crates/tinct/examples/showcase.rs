//! Print every supported code and the effect of the four modes.
//!
//! Try `cargo run --example showcase | cat` to see Auto mode suppress escape
//! sequences when standard output is not a terminal.

use std::io::{Result, Write};

use tinct::{BgColor, Color, Effect, Mode, Reset, Style, StyleWriter};

fn main() -> Result<()> {
    let mut out = StyleWriter::stdout();

    out.emit(Effect::Bold + Color::Red)?;
    writeln!(out, "Hello world!")?;
    out.emit(Reset)?;

    writeln!(out)?;
    out.emit(Color::Blue + Effect::Italic)?;
    writeln!(out, "This text is blue italic")?;
    out.emit(Color::Default)?;
    writeln!(out, "This text is just italic")?;
    out.emit(Color::Green)?;
    writeln!(out, "This text is green italic")?;
    out.emit(Reset)?;
    writeln!(out, "This text is normal")?;

    writeln!(out)?;
    out.emit(BgColor::Blue)?;
    write!(out, "Emit a reset before the newline")?;
    out.emit(Reset)?;
    writeln!(out)?;

    writeln!(out)?;
    let style =
        Effect::Italic + Effect::Bold + Color::Blue + BgColor::Red + Color::Red + BgColor::Cyan;
    out.emit(style)?;
    write!(out, "The last value of each category wins: bold, red, and bgcyan")?;
    out.emit(Reset)?;
    writeln!(out)?;

    writeln!(out)?;
    for (style, label) in [
        (Color::Red + Reset, "normal"),
        (Reset + Color::Red, "red"),
        (Color::Red + Reset + BgColor::Blue, "bgblue"),
        (Effect::Bold + Reset, "normal"),
        (Reset + Effect::Bold, "bold"),
        (Effect::Bold + Reset + Color::Red, "red"),
    ] {
        out.emit(style)?;
        write!(out, "{}", label)?;
        out.emit(Reset)?;
        writeln!(out)?;
    }

    writeln!(out)?;
    let initial = tinct::mode();
    for mode in [Mode::Never, Mode::Auto, Mode::Semi, Mode::Always] {
        tinct::set_mode(mode);
        out.emit(Color::Red)?;
        write!(out, "Mode: {}", mode)?;
        out.emit(Reset)?;
        writeln!(out)?;
    }
    tinct::set_mode(initial);

    writeln!(out)?;
    for color in Color::ALL.into_iter().take(8) {
        let bright = color.bright();
        let cells: [(Style, String); 4] = [
            (color.into(), format!("{:?}", color)),
            (bright.into(), format!("{:?}", bright)),
            (color.background().into(), format!("Bg{:?}", color)),
            (bright.background().into(), format!("Bg{:?}", bright)),
        ];
        for (style, name) in cells {
            out.emit(style)?;
            write!(out, "{:<16}", name)?;
            out.emit(Reset)?;
            write!(out, " ")?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    for effect in Effect::ALL {
        out.emit(effect)?;
        write!(out, "{}", effect.name())?;
        out.emit(Reset)?;
        write!(out, " ")?;
    }
    writeln!(out)?;
    out.flush()
}

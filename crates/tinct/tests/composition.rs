use proptest::prelude::*;
use proptest::sample::select;
use tinct::{BgColor, Code, Color, Effect, Reset, Style};

fn effect() -> impl Strategy<Value = Effect> {
    select(Effect::ALL.to_vec())
}

fn color() -> impl Strategy<Value = Color> {
    select(Color::ALL.to_vec())
}

fn bgcolor() -> impl Strategy<Value = BgColor> {
    select(BgColor::ALL.to_vec())
}

fn code() -> impl Strategy<Value = Code> {
    prop_oneof![
        Just(Code::Reset),
        effect().prop_map(Code::Effect),
        color().prop_map(Code::Color),
        bgcolor().prop_map(Code::BgColor),
    ]
}

fn code_without_reset() -> impl Strategy<Value = Code> {
    prop_oneof![
        effect().prop_map(Code::Effect),
        color().prop_map(Code::Color),
        bgcolor().prop_map(Code::BgColor),
    ]
}

fn style_without_reset() -> impl Strategy<Value = Style> {
    prop::collection::vec(code_without_reset(), 0..5)
        .prop_map(|codes| codes.into_iter().fold(Style::new(), |acc, code| acc + code))
}

fn style() -> impl Strategy<Value = Style> {
    prop::collection::vec(code(), 0..6)
        .prop_map(|codes| codes.into_iter().fold(Style::new(), |acc, code| acc + code))
}

proptest! {
    #[test]
    fn same_code_twice_is_that_code(code in code()) {
        prop_assert_eq!(code + code, Style::from(code));
    }

    #[test]
    fn combine_is_associative_without_reset(
        a in style_without_reset(),
        b in style_without_reset(),
        c in style_without_reset(),
    ) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn combine_is_associative(a in style(), b in style(), c in style()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn empty_style_is_identity(a in style_without_reset()) {
        prop_assert_eq!(Style::new() + a, a);
        prop_assert_eq!(a + Style::new(), a);
    }

    #[test]
    fn later_code_of_same_category_wins(first in color(), second in color()) {
        prop_assert_eq!(
            format!("{}", first + second),
            format!("{}", Style::from(second))
        );
    }

    #[test]
    fn distinct_categories_have_fixed_order(e in effect(), c in color(), b in bgcolor()) {
        let expected = format!("\x1b[{};{};{}m", e.param(), c.param(), b.param());
        for style in [
            e + c + b,
            e + b + c,
            c + e + b,
            c + b + e,
            b + e + c,
            b + c + e,
        ] {
            prop_assert_eq!(format!("{}", style), expected.clone());
        }
    }

    #[test]
    fn reset_discards_only_what_precedes(before in style(), after in style_without_reset()) {
        let style = before + Reset + after;
        prop_assert!(style.has_reset());
        prop_assert_eq!(style, Style::reset() + after);
        prop_assert_eq!(format!("{}", style), format!("{}{}", Reset, after));
    }

    #[test]
    fn params_round_trip(s in style()) {
        let rendered = format!("{}", s);
        let combined = rendered.strip_prefix("\x1b[0m").unwrap_or(&rendered);
        prop_assert_eq!(s.has_reset(), combined.len() < rendered.len());

        let params: Vec<u8> = if combined.is_empty() {
            Vec::new()
        } else {
            combined
                .strip_prefix("\x1b[")
                .and_then(|p| p.strip_suffix('m'))
                .expect("combined sequence")
                .split(';')
                .map(|p| p.parse().expect("decimal parameter"))
                .collect()
        };

        let mut expected = Vec::new();
        expected.extend(s.effect().map(|e| e.param()));
        expected.extend(s.color().map(|c| c.param()));
        expected.extend(s.bgcolor().map(|c| c.param()));
        prop_assert_eq!(&params, &expected);
        prop_assert_eq!(params, s.params().collect::<Vec<_>>());
    }
}

#[test]
fn reset_then_bold_is_not_bold_alone() {
    let style = Color::Red + Reset + Effect::Bold;
    assert_eq!(format!("{}", style), "\x1b[0m\x1b[1m");
    assert_ne!(format!("{}", style), format!("{}", Effect::Bold));
}

#[test]
fn reset_order_matters() {
    assert_ne!(Color::Red + Reset, Reset + Color::Red);
    assert_eq!(Color::Red + Reset, Style::reset());
    assert_eq!(Reset + Color::Red, Style::reset().with_color(Color::Red));
}

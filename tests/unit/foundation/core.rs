use super::*;

#[test]
fn hex_parses_long_and_short_forms() {
    assert_eq!(
        Rgb8::from_hex("#1E335A").unwrap(),
        Rgb8::new(0x1e, 0x33, 0x5a)
    );
    assert_eq!(
        Rgb8::from_hex("d7c4a8").unwrap(),
        Rgb8::new(0xd7, 0xc4, 0xa8)
    );
    assert_eq!(Rgb8::from_hex("#fff").unwrap(), Rgb8::new(255, 255, 255));
    assert_eq!(Rgb8::new(0x11, 0x11, 0x11).to_hex(), "#111111");
}

#[test]
fn hex_rejects_garbage() {
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#gg0000").is_err());
    assert!(Rgb8::from_hex("").is_err());
}

#[test]
fn rgb8_serde_uses_hex_strings() {
    let c: Rgb8 = serde_json::from_str("\"#6B7A4C\"").unwrap();
    assert_eq!(c, Rgb8::new(0x6b, 0x7a, 0x4c));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#6b7a4c\"");
}

#[test]
fn vnd_formats_with_dot_grouping() {
    assert_eq!(Price::vnd(249_000).to_string(), "249.000 đ");
    assert_eq!(Price::vnd(1_450_000).to_string(), "1.450.000 đ");
    assert_eq!(Price::vnd(0).to_string(), "0 đ");
}

#[test]
fn usd_formats_cents() {
    assert_eq!(Price::usd_cents(12_000).to_string(), "$120.00");
    assert_eq!(Price::usd_cents(123_456_7).to_string(), "$12,345.67");
}

#[test]
fn arithmetic_checks_currency_and_overflow() {
    let a = Price::vnd(249_000);
    assert_eq!(a.times(3).unwrap(), Price::vnd(747_000));
    assert_eq!(a.plus(Price::vnd(1_000)).unwrap(), Price::vnd(250_000));
    assert!(a.plus(Price::usd_cents(1)).is_err());
    assert!(Price::vnd(u64::MAX).times(2).is_err());
}

#[test]
fn canvas_rect_spans_dimensions() {
    let r = Canvas {
        width: 640,
        height: 480,
    }
    .rect();
    assert_eq!((r.width(), r.height()), (640.0, 480.0));
}

#[test]
fn straight_alpha_is_premultiplied() {
    let c = Rgba8Premul::from_straight_rgba(255, 255, 255, 26);
    assert_eq!(c.to_array(), [26, 26, 26, 26]);
    assert_eq!(
        Rgba8Premul::from_straight_rgba(0, 0, 0, 0),
        Rgba8Premul::transparent()
    );
    assert_eq!(
        Rgba8Premul::from(Rgb8::new(1, 2, 3)).to_array(),
        [1, 2, 3, 255]
    );
}

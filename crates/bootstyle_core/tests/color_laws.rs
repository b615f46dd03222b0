use bootstyle_core::{brightness, hex_to_rgb, rgb_to_hex, Rgb};
use proptest::prelude::*;

fn within_one(a: &str, b: &str) -> bool {
    let a = Rgb::from_hex(a).unwrap().to_rgb8();
    let b = Rgb::from_hex(b).unwrap().to_rgb8();
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (i16::from(*x) - i16::from(*y)).abs() <= 1)
}

fn hex6() -> impl Strategy<Value = String> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
}

proptest! {
    #[test]
    fn round_trip_is_within_one_step(c in hex6()) {
        let (r, g, b) = hex_to_rgb(&c).unwrap();
        prop_assert!(within_one(&rgb_to_hex(r, g, b), &c));
    }

    #[test]
    fn zero_delta_is_identity(c in hex6()) {
        prop_assert!(within_one(&brightness(&c, 0.0).unwrap(), &c));
    }

    #[test]
    fn shaded_colors_stay_valid(c in hex6(), delta in -0.99f64..=5.0) {
        let shaded = brightness(&c, delta).unwrap();
        prop_assert!(Rgb::from_hex(&shaded).is_ok());

        let back = brightness(&shaded, -delta.min(0.99)).unwrap();
        prop_assert!(Rgb::from_hex(&back).is_ok());
    }

    #[test]
    fn darkening_never_raises_value(c in hex6(), delta in -0.99f64..0.0) {
        let before = Rgb::from_hex(&c).unwrap().to_hsv().v;
        let after = Rgb::from_hex(&brightness(&c, delta).unwrap()).unwrap().to_hsv().v;
        prop_assert!(after <= before + 1e-9);
    }
}

#[test]
fn lighten_then_darken_is_not_inverse() {
    // Lightening saturates at full value, so the trip back lands elsewhere
    let original = "#e0e0e0";
    let lighter = brightness(original, 0.2).unwrap();
    assert_eq!(lighter, "#ffffff");
    let back = brightness(&lighter, -0.2).unwrap();
    assert_ne!(back, brightness(original, 0.0).unwrap());
}

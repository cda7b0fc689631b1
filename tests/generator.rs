//! Library-level rendering tests with deterministic palettes.

use avatargen::adapters::glyphs::BitmapFont;
use avatargen::adapters::palette::{FixedColor, RandomPalette};
use avatargen::{
    avatar, circular_avatar, AvatarGenerator, AvatarKind, BorderSpec, Color, Resources, Shape,
};
use tiny_skia::Pixmap;

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 200, 0);
const PALETTE: Color = Color::rgb(0x19, 0x76, 0xD2);

fn generator() -> AvatarGenerator {
    generator_at(1.0)
}

fn generator_at(density: f32) -> AvatarGenerator {
    AvatarGenerator::new(Resources {
        density,
        font: Box::new(BitmapFont),
        fallback: None,
        palette: Box::new(FixedColor(PALETTE)),
    })
    .unwrap()
}

fn solid(width: u32, height: u32, color: Color) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    pixmap
}

fn is_transparent(color: Option<Color>) -> bool {
    color.is_some_and(|c| c.a == 0)
}

#[test]
fn empty_label_yields_nothing() {
    let mut g = generator();
    assert!(g.generate_avatar("", Some(RED), None).unwrap().is_none());
    assert!(g.generate_circular_avatar("", 10, Some(RED), None).unwrap().is_none());
    assert!(avatar("", &mut g).unwrap().is_none());
    assert!(circular_avatar("", &mut g).unwrap().is_none());
}

#[test]
fn ada_on_red_is_red_with_white_a_in_the_middle() {
    let mut g = generator();
    g.set_uniform_size(100);
    let avatar = g.generate_avatar("Ada", Some(RED), None).unwrap().unwrap();

    assert_eq!((avatar.width(), avatar.height()), (100, 100));
    assert_eq!(avatar.kind(), AvatarKind::Glyph('A'));
    assert_eq!(avatar.shape(), Shape::Rect);
    assert_eq!(avatar.pixel(0, 0), Some(RED));
    assert_eq!(avatar.pixel(99, 99), Some(RED));
    assert_eq!(avatar.pixel(99, 0), Some(RED));
    // Crossbar of the A passes through the center.
    assert_eq!(avatar.pixel(50, 50), Some(Color::WHITE));
}

#[test]
fn rectangular_glyph_output_matches_configured_size() {
    let mut g = generator();
    g.set_size(120, 64);
    let avatar = g.generate_avatar("zoe", Some(RED), None).unwrap().unwrap();
    assert_eq!((avatar.width(), avatar.height()), (120, 64));
    assert_eq!(avatar.kind(), AvatarKind::Glyph('Z'));
}

#[test]
fn digit_label_takes_glyph_path() {
    let mut g = generator();
    let avatar = g.generate_avatar("123", Some(RED), None).unwrap().unwrap();
    assert_eq!(avatar.kind(), AvatarKind::Glyph('1'));
}

#[test]
fn glyph_is_centered() {
    let mut g = generator();
    g.set_uniform_size(100);
    g.set_text_color(Color::BLACK);
    // 'H' at 25px is 12.5px wide and 17.5px tall, centered on (50, 50).
    let avatar = g.generate_avatar("H", Some(RED), None).unwrap().unwrap();
    assert_eq!(avatar.pixel(44, 50), Some(Color::BLACK));
    assert_eq!(avatar.pixel(55, 50), Some(Color::BLACK));
    assert_eq!(avatar.pixel(50, 40), Some(RED));
    assert_eq!(avatar.pixel(50, 50), Some(Color::BLACK));
    assert_eq!(avatar.pixel(40, 50), Some(RED));
    assert_eq!(avatar.pixel(60, 50), Some(RED));
}

#[test]
fn symbol_label_draws_fallback_at_origin() {
    let mut g = generator();
    g.set_uniform_size(100);
    g.set_fallback(solid(10, 10, GREEN));
    let avatar = g.generate_avatar("#tag", Some(RED), None).unwrap().unwrap();

    assert_eq!(avatar.kind(), AvatarKind::Fallback);
    assert_eq!(avatar.pixel(5, 5), Some(GREEN));
    assert_eq!(avatar.pixel(50, 50), Some(RED));
}

#[test]
fn decoded_image_becomes_fallback() {
    let mut g = generator();
    g.set_uniform_size(100);
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        20,
        20,
        image::Rgba([GREEN.r, GREEN.g, GREEN.b, 255]),
    ));
    g.set_fallback_image(&img).unwrap();

    let avatar = g.generate_avatar("?", Some(RED), None).unwrap().unwrap();
    assert_eq!(avatar.pixel(10, 10), Some(GREEN));
    assert_eq!(avatar.pixel(30, 30), Some(RED));

    g.reset_fallback().unwrap();
    let avatar = g.generate_avatar("?", Some(RED), None).unwrap().unwrap();
    assert_ne!(avatar.pixel(10, 10), Some(GREEN));
}

#[test]
fn empty_fallback_image_is_rejected() {
    let mut g = generator();
    let img = image::DynamicImage::new_rgba8(0, 0);
    assert!(g.set_fallback_image(&img).is_err());
}

#[test]
fn huge_radius_fills_the_square() {
    let mut g = generator();
    g.set_uniform_size(60);
    let border = BorderSpec::new(0.0, Color::BLACK);
    let avatar =
        g.generate_circular_avatar("Ada", u32::MAX, Some(RED), Some(&border)).unwrap().unwrap();
    assert_eq!(avatar.pixel(0, 0), Some(RED));
    assert_eq!(avatar.pixel(59, 59), Some(RED));
}

#[test]
fn builtin_fallback_is_used_for_symbols() {
    let mut g = generator();
    g.set_uniform_size(100);
    let avatar = g.generate_avatar("@handle", Some(RED), None).unwrap().unwrap();
    assert_eq!(avatar.kind(), AvatarKind::Fallback);
    // Head of the 50px silhouette drawn at the origin.
    assert_eq!(avatar.pixel(25, 18), Some(Color::from_rgb_u32(0xECEFF1)));
    assert_eq!(avatar.pixel(75, 75), Some(RED));
}

#[test]
fn circular_output_is_square_of_smaller_side() {
    let mut g = generator();
    g.set_size(120, 80);
    let avatar = g.generate_circular_avatar("Ada", 0, Some(RED), None).unwrap().unwrap();
    assert_eq!((avatar.width(), avatar.height()), (80, 80));
    assert_eq!(avatar.shape(), Shape::Circle);
    assert!(is_transparent(avatar.pixel(0, 0)));
    assert!(is_transparent(avatar.pixel(79, 79)));
}

#[test]
fn explicit_radius_keeps_output_side() {
    let mut g = generator();
    g.set_uniform_size(100);
    let avatar = g.generate_circular_avatar("Ada", 20, Some(RED), None).unwrap().unwrap();
    assert_eq!((avatar.width(), avatar.height()), (100, 100));
    // Inside the 20px circle, outside the glyph.
    assert_eq!(avatar.pixel(50, 35), Some(RED));
    // Outside the circle but inside the square.
    assert!(is_transparent(avatar.pixel(50, 20)));
}

#[test]
fn circular_fallback_is_centered_in_circle() {
    let mut g = generator();
    g.set_uniform_size(100);
    g.set_fallback(solid(50, 50, GREEN));
    let avatar = g.generate_circular_avatar("!", 0, Some(RED), None).unwrap().unwrap();

    assert_eq!(avatar.kind(), AvatarKind::Fallback);
    assert_eq!((avatar.width(), avatar.height()), (100, 100));
    assert_eq!(avatar.pixel(50, 50), Some(GREEN));
    assert_eq!(avatar.pixel(10, 50), Some(RED));
    assert!(is_transparent(avatar.pixel(2, 2)));
}

#[test]
fn circle_without_border_gets_themed_rim() {
    // Density 3 makes the default rim 6px wide: 47..53 from the center.
    let mut g = generator_at(3.0);
    g.set_uniform_size(100);
    let avatar = g.generate_circular_avatar("Ada", 0, Some(RED), None).unwrap().unwrap();
    // The fixed palette answers for the border theme too.
    assert_eq!(avatar.pixel(50, 1), Some(PALETTE));
    assert_eq!(avatar.pixel(50, 10), Some(RED));
}

#[test]
fn caller_border_replaces_default_rim() {
    let mut g = generator();
    g.set_uniform_size(100);
    let border = BorderSpec::new(4.0, Color::BLACK);
    let avatar = g.generate_circular_avatar("Ada", 0, Some(RED), Some(&border)).unwrap().unwrap();
    assert_eq!(avatar.pixel(50, 0), Some(Color::BLACK));
    assert_eq!(avatar.pixel(50, 5), Some(RED));
}

#[test]
fn zero_thickness_border_is_invisible() {
    let mut g = generator();
    g.set_uniform_size(60);
    let border = BorderSpec::new(0.0, Color::BLACK);
    let avatar = g.generate_avatar("Ada", Some(RED), Some(&border)).unwrap().unwrap();
    assert_eq!(avatar.pixel(0, 0), Some(RED));

    let circle = g.generate_circular_avatar("Ada", 0, Some(RED), Some(&border)).unwrap().unwrap();
    assert_eq!(circle.pixel(30, 1), Some(RED));
}

#[test]
fn rectangular_border_is_stroked_inside_edge() {
    let mut g = generator();
    g.set_uniform_size(60);
    let border = BorderSpec::new(3.0, Color::BLACK);
    let avatar = g.generate_avatar("Ada", Some(RED), Some(&border)).unwrap().unwrap();
    assert_eq!(avatar.pixel(0, 30), Some(Color::BLACK));
    assert_eq!(avatar.pixel(59, 30), Some(Color::BLACK));
    assert_eq!(avatar.pixel(5, 30), Some(RED));
}

#[test]
fn identical_inputs_render_identical_pixels() {
    let mut g = generator();
    g.set_uniform_size(80);
    let first = g.generate_avatar("Ada", Some(RED), None).unwrap().unwrap();
    let second = g.generate_avatar("Ada", Some(RED), None).unwrap().unwrap();
    assert_eq!(first.pixmap().data(), second.pixmap().data());

    let round_a = g.generate_circular_avatar("Ada", 0, Some(RED), None).unwrap().unwrap();
    let round_b = g.generate_circular_avatar("Ada", 0, Some(RED), None).unwrap().unwrap();
    assert_eq!(round_a.pixmap().data(), round_b.pixmap().data());
}

#[test]
fn seeded_palettes_reproduce_backgrounds() {
    let make = || {
        AvatarGenerator::new(Resources {
            palette: Box::new(RandomPalette::with_seed(2024)),
            ..Resources::default()
        })
        .unwrap()
    };
    let (mut a, mut b) = (make(), make());
    for label in ["Ada", "Grace", "#x", "7"] {
        let left = avatar(label, &mut a).unwrap().unwrap();
        let right = avatar(label, &mut b).unwrap().unwrap();
        assert_eq!(left.pixmap().data(), right.pixmap().data());
    }
}

#[test]
fn convenience_functions_use_themed_colors() {
    let mut g = generator();
    let square = avatar("Ada", &mut g).unwrap().unwrap();
    assert_eq!(square.pixel(0, 0), Some(PALETTE));
    assert_eq!((square.width(), square.height()), (50, 50));

    let round = circular_avatar("Ada", &mut g).unwrap().unwrap();
    assert_eq!(round.shape(), Shape::Circle);
    assert_eq!((round.width(), round.height()), (50, 50));
}

#[test]
fn size_setters_follow_zero_rules() {
    let mut g = generator();
    g.set_uniform_size(70);
    g.set_uniform_size(0);
    assert_eq!((g.width(), g.height()), (70, 70));

    g.set_size(0, 30);
    assert_eq!((g.width(), g.height()), (50, 50));
}

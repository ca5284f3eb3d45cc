use std::path::Path;

use glyphcast::matching::rounding::RoundingPolicy;
use glyphcast::matching::CharMatcher;
use glyphcast::raster::manipulate::pad_to_power_of_two;
use glyphcast::raster::load_image_file;
use glyphcast::shell::{Session, SessionSettings, ShellStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITERATIONS: usize = 200;
const RNG_SEED: u64 = 0x04C1_1DB7_1EDC_6F41;

fn deterministic_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

// 6x3, left half black, right half white.
fn write_half_black_png(path: &Path) {
    let mut img = image::RgbImage::from_pixel(6, 3, image::Rgb([255, 255, 255]));
    for y in 0..3 {
        for x in 0..3 {
            img.put_pixel(x, y, image::Rgb([0, 0, 0]));
        }
    }
    img.save(path).unwrap();
}

fn run(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    session
        .run(script.as_bytes(), &mut out, ShellStyle::default())
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn png_to_console_art() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("half.png");
    write_half_black_png(&path);

    let padded = pad_to_power_of_two(&load_image_file(&path).unwrap());
    assert_eq!((padded.width, padded.height), (8, 4));

    let mut session = Session::new(padded, SessionSettings::default()).unwrap();
    let out = run(
        &mut session,
        "remove all\nadd space\nadd #\nasciiArt\nres up\nasciiArt\nres down\nres down\n",
    );
    let expected = "  # \n\
                    Resolution set to 4\n    # # \n#   # # \n\
                    Resolution set to 2\n\
                    Did not change resolution due to exceeding boundaries.\n";
    assert_eq!(out, expected);
}

#[test]
fn html_session_writes_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("half.png");
    write_half_black_png(&path);
    let html_path = dir.path().join("page.html");

    let mut settings = SessionSettings::default();
    settings.output.html_path = html_path.clone();
    settings.output.html_font = "Monaco".to_string();
    settings.rounding = RoundingPolicy::Up;
    let padded = pad_to_power_of_two(&load_image_file(&path).unwrap());
    let mut session = Session::new(padded, settings).unwrap();

    let out = run(&mut session, "output html\nasciiArt\nexit\n");
    assert!(out.is_empty());
    let page = std::fs::read_to_string(&html_path).unwrap();
    assert!(page.contains("font-family:'Monaco'"));
}

#[test]
fn rounding_policies_respect_their_side() {
    let mut rng = deterministic_rng();
    for _ in 0..ITERATIONS {
        let size = rng.random_range(2..20);
        let palette: Vec<char> = (0..size)
            .map(|_| rng.random_range(' '..='~'))
            .collect();
        let mut matcher = CharMatcher::new(palette);
        let levels = matcher.levels().to_vec();
        let level_of = |c: char| levels.iter().find(|&&(_, l)| l == c).map(|&(b, _)| b);
        let brightness: f64 = rng.random_range(0.0..=1.0);

        matcher.set_rounding(RoundingPolicy::Down);
        let down = level_of(matcher.char_for_brightness(brightness).unwrap()).unwrap();
        matcher.set_rounding(RoundingPolicy::Up);
        let up = level_of(matcher.char_for_brightness(brightness).unwrap()).unwrap();
        matcher.set_rounding(RoundingPolicy::Nearest);
        let nearest = level_of(matcher.char_for_brightness(brightness).unwrap()).unwrap();

        if levels.len() > 1 {
            assert!(down <= brightness, "down {down} above {brightness}");
            assert!(up >= brightness, "up {up} below {brightness}");
        }
        let best = levels
            .iter()
            .map(|&(b, _)| (b - brightness).abs())
            .fold(f64::INFINITY, f64::min);
        assert!(((nearest - brightness).abs() - best).abs() < 1e-12);
    }
}

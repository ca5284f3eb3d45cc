use rand::Rng;

use crate::raster::Image;

// --- Demo image generator ---

pub const DEMO_WIDTH: usize = 256;
pub const DEMO_HEIGHT: usize = 128;

struct Disc {
    cx: f32,
    cy: f32,
    radius: f32,
    tint: [f32; 3],
}

fn random_disc(rng: &mut impl Rng, width: f32, height: f32) -> Disc {
    Disc {
        cx: rng.random_range(0.0..width),
        cy: rng.random_range(0.0..height),
        radius: rng.random_range(height * 0.08..height * 0.3),
        tint: [
            rng.random_range(0.3_f32..1.0),
            rng.random_range(0.3_f32..1.0),
            rng.random_range(0.3_f32..1.0),
        ],
    }
}

/// A dark-to-light radial backdrop with a handful of soft-edged bright discs,
/// used when no image file is given.
pub fn generate_demo_image(width: usize, height: usize, rng: &mut impl Rng) -> Image {
    let (w, h) = (width as f32, height as f32);
    let discs: Vec<Disc> = (0..rng.random_range(4..9))
        .map(|_| random_disc(rng, w, h))
        .collect();

    let max_dist = (w * w + h * h).sqrt() * 0.5;
    let mut image = Image::filled(width, height, [0, 0, 0]);
    for y in 0..height {
        for x in 0..width {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            let dist = ((fx - w * 0.5).powi(2) + (fy - h * 0.5).powi(2)).sqrt();
            let base = 0.15 + 0.35 * (dist / max_dist.max(1.0));
            let mut rgb = [base; 3];

            for disc in &discs {
                let d = ((fx - disc.cx).powi(2) + (fy - disc.cy).powi(2)).sqrt();
                // Full strength inside 70% of the radius, fading out to the rim.
                let weight = (1.0 - (d / disc.radius - 0.7) / 0.3).clamp(0.0, 1.0);
                for (channel, tint) in rgb.iter_mut().zip(disc.tint) {
                    *channel = channel.max(tint * weight);
                }
            }

            image.set_pixel(x, y, rgb.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8));
        }
    }

    tracing::info!(width, height, discs = discs.len(), "generated demo image");
    image
}

//! Writes a deterministic `reviews.csv` for exercising the dashboard
//! without the real dataset. The output is intentionally messy: padded
//! headers, percent-formatted discounts, a sprinkling of unparseable
//! ratings and comma-grouped rating counts, and missing links.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const CATEGORY_PATHS: [&str; 7] = [
    "Electronics|HomeTheater|Accessories",
    "Computers&Accessories|Accessories&Peripherals|Cables",
    "Home&Kitchen|Kitchen&HomeAppliances|SmallKitchenAppliances",
    "OfficeProducts|OfficePaperProducts|Paper",
    "MusicalInstruments|Microphones|Condenser",
    "Car&Motorbike|CarAccessories|InteriorAccessories",
    "Health&PersonalCare|HomeMedicalSupplies|HealthMonitors",
];

const BRANDS: [&str; 8] = [
    "Boltix", "Nuvora", "Zentek", "Apexon", "Calyra", "Vextro", "Orniq", "Lumera",
];

const PRODUCTS: [&str; 8] = [
    "USB-C Cable",
    "Bluetooth Speaker",
    "Electric Kettle",
    "Notebook Stand",
    "Condenser Microphone",
    "Dashboard Camera",
    "Thermometer",
    "Copier Paper",
];

const DESCRIPTORS: [&str; 6] = [
    "Ultra-Fast Braided",
    "Portable Rechargeable",
    "Stainless Steel",
    "Adjustable Aluminium",
    "Professional Studio",
    "Compact Digital",
];

const FEATURES: [&str; 5] = [
    "with Quick Charge Support and Tangle-Free Design",
    "with Built-In Rechargeable Battery (12 Hours Playback)",
    "with Auto Shut-Off and Boil-Dry Protection",
    "with Noise Cancellation for Recording and Streaming",
    "for Home, Office and Travel Use",
];

fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "reviews.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    // Padded header cells: the loader is expected to trim these.
    writer
        .write_record([
            "product_id",
            "product_name",
            " category",
            "rating",
            "discount_percentage",
            " rating_count ",
            "product_link",
            "img_link",
        ])
        .expect("Failed to write header");

    let mut row_id: u64 = 0;
    for path in CATEGORY_PATHS {
        for _ in 0..40 {
            row_id += 1;

            let name = format!(
                "{} {} {} {}",
                rng.pick(&BRANDS),
                rng.pick(&DESCRIPTORS),
                rng.pick(&PRODUCTS),
                rng.pick(&FEATURES),
            );

            // A couple of rows with no category path at all.
            let category = if rng.chance(0.02) { "" } else { path };

            let rating = if rng.chance(0.03) {
                "N/A".to_string()
            } else {
                format!("{:.1}", rng.gauss(4.1, 0.35).clamp(1.0, 5.0))
            };

            let discount = format!("{}%", (rng.next_f64() * 80.0) as u64);

            let count = (rng.next_f64().powi(2) * 20_000.0) as u64;
            let rating_count = if rng.chance(0.04) {
                // Comma-grouped counts fail coercion and drop the row.
                with_thousands(count.max(1_000))
            } else {
                count.to_string()
            };

            let product_link = if rng.chance(0.1) {
                String::new()
            } else {
                format!("https://example.com/product/{row_id}")
            };
            let img_link = if rng.chance(0.1) {
                String::new()
            } else {
                format!("https://img.example.com/{row_id}.jpg")
            };

            writer
                .write_record([
                    &format!("B{row_id:09}"),
                    &name,
                    &category.to_string(),
                    &rating,
                    &discount,
                    &rating_count,
                    &product_link,
                    &img_link,
                ])
                .expect("Failed to write row");
        }
    }

    writer.flush().expect("Failed to flush output");

    println!(
        "Wrote {row_id} products across {} categories to {output_path}",
        CATEGORY_PATHS.len()
    );
}

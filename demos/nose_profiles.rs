// nose_profiles.rs
//
// Builds every nose cone variant for one set of dimensions and writes each
// cross-section to svg/<name>.svg.

use nosecone::io::svg::ToSVG;
use nosecone::{NoseCone, NoseStyle, Shoulder};
use std::fs;

fn main() {
    // Ensure the /svg folder exists
    let _ = fs::create_dir_all("svg");

    let shoulder = Shoulder {
        length: 30.0,
        radius: 24.0,
        thickness: 2.0,
    };
    let base = NoseCone::new(100.0, 25.0, 5.0, 60);

    let variants = [
        ("solid", base),
        ("solid_shoulder", base.with_shoulder(shoulder)),
        ("hollow", base.with_wall(NoseStyle::Hollow, 2.0)),
        (
            "hollow_shoulder",
            base.with_wall(NoseStyle::Hollow, 2.0).with_shoulder(shoulder),
        ),
        ("capped", base.with_wall(NoseStyle::Capped, 2.0)),
        (
            "capped_shoulder",
            base.with_wall(NoseStyle::Capped, 2.0).with_shoulder(shoulder),
        ),
        ("sharp", NoseCone::new(100.0, 25.0, 0.0, 60)),
    ];

    for (name, cone) in variants {
        let profile = match cone.profile() {
            Ok(profile) => profile,
            Err(err) => {
                eprintln!("{name}: {err}");
                continue;
            },
        };
        let sketch = profile.to_sketch(8, Some(name));
        println!(
            "{name:>16}: area {:10.3}  volume {:12.3}",
            sketch.area(),
            sketch.revolved_volume()
        );
        if let Some(solved) = profile.outer().solved {
            println!(
                "{:>16}  virtual length {:.4} after {} iterations",
                "", solved.virtual_length, solved.iterations
            );
        }
        if let Err(err) = sketch.save_svg(format!("svg/{name}.svg")) {
            eprintln!("{name}: {err}");
        }
    }
}

//! The `curvegrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("curvegrade.toml").exists() {
        println!("curvegrade.toml already exists, skipping.");
    } else {
        std::fs::write("curvegrade.toml", SAMPLE_CONFIG)?;
        println!("Created curvegrade.toml");
    }

    std::fs::create_dir_all("problems")?;
    let example_path = std::path::Path::new("problems/example.toml");
    if example_path.exists() {
        println!("problems/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_PROBLEM)?;
        println!("Created problems/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit problems/example.toml with your reference curve");
    println!("  2. Run: curvegrade validate --problem problems/example.toml");
    println!("  3. Run: curvegrade grade --problem example --drawing drawing.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# curvegrade configuration

problems_dir = "./problems"
default_problem = "stress-strain-steel"
output_dir = "./curvegrade-results"
"#;

const EXAMPLE_PROBLEM: &str = r#"[problem]
id = "example"
name = "Example: linear rise then plateau"
prompt = "Draw a curve that rises linearly, then levels off."
hint = "The plateau starts about halfway across."
reference = [
    { x = 0.0, y = 0.0 },
    { x = 0.5, y = 0.8 },
    { x = 1.0, y = 0.8 },
]

[plot]
origin_x = 80.0
origin_y = 40.0
width = 560.0
height = 350.0

[thresholds]
resample_count = 160
pass_score = 60.0
max_mean_distance = 0.35
max_hausdorff = 0.22
hausdorff_penalty = 35.0
min_stroke_points = 10
"#;

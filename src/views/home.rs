// Home page: tagline and quick links
use super::{Route, heading};

pub const SAFETY_GUIDE_URL: &str =
    "https://drive.google.com/uc?export=download&id=1eeLSoKq_fTuR3mcVYC-RbON7PVUiuxC-";

pub fn render() -> String {
    let lines = vec![
        heading("🛡️", "VigrahaRakṣhitā"),
        "भारत की आपदा सुरक्षा प्रहरी - Guardian of India during Disasters".to_string(),
        String::new(),
        format!("  📊 View Dashboard      → {}", Route::Dashboard.path()),
        format!("  🙋 Volunteer Now       → {}", Route::Volunteer.path()),
        format!("  📄 Download Safety Guide → {}", SAFETY_GUIDE_URL),
    ];
    lines.join("\n")
}

use serde::{Deserialize, Serialize};

/// Size limits and build flags of one supported display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Display name used in logs and reports
    pub name: String,

    /// Largest width the logo may occupy, in pixels
    pub max_width: u32,

    /// Largest height the logo may occupy, in pixels
    pub max_height: u32,

    /// Preprocessor symbol that selects this asset at firmware build time
    pub device_flag: String,

    /// Base name of the generated `.cpp`/`.h` pair
    pub output_name: String,
}

impl HardwareProfile {
    pub fn new(
        name: impl Into<String>,
        max_width: u32,
        max_height: u32,
        device_flag: impl Into<String>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            max_width,
            max_height,
            device_flag: device_flag.into(),
            output_name: output_name.into(),
        }
    }

    /// Inkplate 10: 1200x825
    pub fn inkplate10() -> Self {
        Self::new("INKPLATE10", 1200, 825, "ARDUINO_INKPLATE10V2", "logo")
    }

    /// Inkplate 6COLOR: 600x448
    pub fn inkplate6color() -> Self {
        Self::new(
            "INKPLATE6COLOR",
            600,
            448,
            "ARDUINO_INKPLATECOLOR",
            "logo_6color",
        )
    }

    /// The built-in profile table, in conversion order
    pub fn builtin() -> Vec<Self> {
        vec![Self::inkplate10(), Self::inkplate6color()]
    }
}

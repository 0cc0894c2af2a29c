use clap::ValueEnum;
use kiln_config::{AssetTemplates, BuildMode, FilenameTemplate};

/// Build mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Mode {
    /// Readable filenames, inline source maps, no minification
    #[value(name = "development")]
    Development,

    /// Content-hashed filenames, minified styles and images
    #[value(name = "production")]
    Production,
}

impl From<Mode> for BuildMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Development => BuildMode::Development,
            Mode::Production => BuildMode::Production,
        }
    }
}

/// Asset kind for filename rendering
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum AssetKind {
    /// Script bundle (js/)
    Script,
    /// Extracted stylesheet (css/)
    Style,
    /// Raster image (img/)
    Image,
    /// Web font (fonts/)
    Font,
    /// SVG graphic (assets/)
    Svg,
    /// No sub-directory
    Bare,
}

impl AssetKind {
    pub fn template(self, mode: BuildMode) -> FilenameTemplate {
        let templates = AssetTemplates::for_mode(mode);
        match self {
            AssetKind::Script => templates.script,
            AssetKind::Style => templates.style,
            AssetKind::Image => templates.image,
            AssetKind::Font => templates.font,
            AssetKind::Svg => templates.svg,
            AssetKind::Bare => FilenameTemplate::new(mode),
        }
    }
}

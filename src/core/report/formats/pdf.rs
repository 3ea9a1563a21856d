//! PDF transcript generator via HTML-to-PDF conversion
//!
//! Renders the HTML transcript first and converts it with headless
//! Chrome/Chromium (or a caller-supplied converter command). The HTML
//! template's fixed page geometry drives pagination during conversion.

use super::html::HtmlReporter;
use crate::core::report::{ReportGenerator, TranscriptContext};
use std::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};

/// PDF transcript generator using HTML-to-PDF conversion
pub struct PdfReporter {
    /// Optional custom PDF converter command
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a new PDF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF reporter with a custom converter command
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }

    /// Detect an available Chrome/Chromium browser
    fn detect_chrome() -> Option<String> {
        let candidates = [
            "google-chrome",
            "chrome",
            "chromium",
            "chromium-browser",
            "google-chrome-stable",
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome", // macOS
            "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",   // Windows
        ];

        for candidate in candidates {
            if let Ok(output) = Command::new(candidate).arg("--version").output() {
                if output.status.success() {
                    return Some(candidate.to_owned());
                }
            }
        }

        None
    }

    /// Convert an HTML file to PDF using Chrome/Chromium
    fn html_to_pdf_chrome(
        chrome_cmd: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--run-all-compositor-stages-before-draw")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()?;

        if !status.success() {
            return Err("Chrome PDF conversion failed".into());
        }

        Ok(())
    }

    /// Convert the rendered HTML transcript to PDF
    fn convert_html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(converter) = &self.converter {
            return Self::html_to_pdf_chrome(converter, html_path, pdf_path);
        }

        if let Some(chrome) = Self::detect_chrome() {
            return Self::html_to_pdf_chrome(&chrome, html_path, pdf_path);
        }

        Err("PDF conversion failed: Chrome/Chromium not found.\n\
            \n\
            To generate PDF transcripts, install Chrome or Chromium:\n\
            \n\
            • Ubuntu/Debian:  sudo apt install chromium-browser\n\
            • Fedora/RHEL:    sudo dnf install chromium\n\
            • macOS:          brew install --cask google-chrome\n\
            • Windows:        Download from https://www.google.com/chrome/\n\
            "
        .into())
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    /// Generate a PDF transcript via HTML-to-PDF conversion
    fn generate(&self, ctx: &TranscriptContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        // Render the HTML transcript to a temporary file
        let temp_dir = std::env::temp_dir();
        let html_path = temp_dir.join(format!("acadtrack_transcript_{}.html", std::process::id()));

        let html_reporter = HtmlReporter::new();
        html_reporter.generate(ctx, &html_path)?;

        let result = self.convert_html_to_pdf(&html_path, output_path);

        // Clean up the temporary HTML file either way
        let _ = std::fs::remove_file(&html_path);

        result
    }

    /// Render method for consistency with other reporters
    fn render(&self, _ctx: &TranscriptContext) -> Result<String, Box<dyn Error>> {
        Ok(String::from(
            "PDF transcripts are generated via HTML-to-PDF conversion.",
        ))
    }
}

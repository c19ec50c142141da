use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

// Oldest browsers the portal supports, encoded as major << 16
fn browser_targets() -> Targets {
    Targets::from(Browsers {
        chrome: Some(100 << 16),
        firefox: Some(100 << 16),
        safari: Some(15 << 16),
        edge: Some(100 << 16),
        ..Browsers::default()
    })
}

fn bundle_stylesheet(entry: &Path) -> Result<String, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler.bundle(entry).map_err(|e| e.to_string())?;

    stylesheet
        .minify(MinifyOptions {
            targets: browser_targets(),
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets: browser_targets(),
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;

    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    if let Err(e) = fs::create_dir_all(OUTPUT_DIR) {
        panic!("Failed to create {OUTPUT_DIR}: {e}");
    }

    let css = match bundle_stylesheet(Path::new(ENTRY)) {
        Ok(css) => css,
        Err(e) => panic!("Failed to bundle {ENTRY}: {e}"),
    };

    if let Err(e) = fs::write(OUTPUT, css) {
        panic!("Failed to write {OUTPUT}: {e}");
    }
}

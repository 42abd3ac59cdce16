//! Walks the preview and confirmation primitives through the files given on
//! the command line, printing each page snapshot as JSON.

use admin_ui_state::config::INITIAL_PREVIEW_ENV;
use admin_ui_state::{
    Confirmation, ConfirmationState, ImagePreview, ImagePreviewState, ObjectUrlRegistry,
    file_utils,
};
use log::{error, info, warn};
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Props a page renderer would receive for an "edit image" page.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageProps<'a> {
    step: &'a str,
    image: admin_ui_state::ImagePreviewSnapshot,
    delete_confirmation: admin_ui_state::ConfirmationSnapshot<String>,
}

/// Picks the supported image paths out of the command-line arguments.
fn startup_files_from_args(args: impl IntoIterator<Item = OsString>) -> Vec<PathBuf> {
    args.into_iter()
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .filter(|path| {
            let supported = file_utils::is_supported_image(path);
            if !supported {
                warn!("Skipping unsupported file: {}", path.display());
            }
            supported
        })
        .collect()
}

fn print_props(
    step: &str,
    image: &ImagePreviewState,
    confirmation: &ConfirmationState<String>,
) -> Result<(), serde_json::Error> {
    let props = PageProps {
        step,
        image: image.snapshot(),
        delete_confirmation: confirmation.snapshot(),
    };
    println!("{}", serde_json::to_string(&props)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();
    #[cfg(not(debug_assertions))]
    env_logger::init();

    let registry = ObjectUrlRegistry::new();
    let initial_preview = std::env::var(INITIAL_PREVIEW_ENV).ok();
    let mut image = ImagePreviewState::new(registry.clone(), initial_preview);
    let mut confirmation = ConfirmationState::<String>::new();

    print_props("initial", &image, &confirmation)?;

    for path in startup_files_from_args(std::env::args_os().skip(1)) {
        match file_utils::load_file(&path) {
            Ok(file) => {
                image.handle_file_change(Some(file));
                print_props("file-selected", &image, &confirmation)?;
            }
            Err(e) => error!("Failed to load {}: {}", path.display(), e),
        }
    }

    let selected = image.file().map(|file| file.name().to_string());
    if let Some(name) = selected {
        confirmation.open(name);
        print_props("confirm-delete", &image, &confirmation)?;

        if let Some(name) = confirmation.take() {
            info!("Deleting {}", name);
            image.reset();
        }
        print_props("deleted", &image, &confirmation)?;
    }

    info!("{} preview URL(s) still live", registry.live_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_unsupported_files_are_skipped() {
        let args = ["-v", "a.png", "notes.txt", "B.JPG"].map(OsString::from);

        let files = startup_files_from_args(args);

        assert_eq!(files, vec![PathBuf::from("a.png"), PathBuf::from("B.JPG")]);
    }

    #[test]
    fn no_arguments_yield_no_files() {
        assert!(startup_files_from_args(Vec::new()).is_empty());
    }
}

use crate::core::walker::{EntryKind, WalkEntry};
use crate::domain::model::{ComponentCategory, ComponentRecord};
use std::path::Path;

/// Decides whether one entry directly under a category directory is a component.
///
/// * a directory is a component when it holds `index.<ext>` or a sibling
///   `<name>.<ext>` exists next to it;
/// * a file is a component when its extension is recognized, named by its stem.
///
/// `prefix` is the category directory relative to the source directory
/// (`components/common`). Anything else returns `None`.
pub fn classify_entry(
    category: ComponentCategory,
    category_dir: &Path,
    prefix: &str,
    entry: &WalkEntry,
    extensions: &[String],
) -> Option<ComponentRecord> {
    let file_name = entry.file_name()?;

    match entry.kind {
        EntryKind::Dir => {
            let has_index = extensions
                .iter()
                .any(|ext| entry.path.join(format!("index.{}", ext)).is_file());
            let has_sibling = extensions
                .iter()
                .any(|ext| category_dir.join(format!("{}.{}", file_name, ext)).is_file());

            (has_index || has_sibling).then(|| ComponentRecord {
                name: file_name.to_string(),
                relative_path: format!("{}/{}/", prefix, file_name),
                category,
            })
        }
        EntryKind::File => {
            let stem = recognized_stem(file_name, extensions)?;
            Some(ComponentRecord {
                name: stem.to_string(),
                relative_path: format!("{}/{}", prefix, file_name),
                category,
            })
        }
        EntryKind::Other => None,
    }
}

fn recognized_stem<'a>(file_name: &'a str, extensions: &[String]) -> Option<&'a str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || !extensions.iter().any(|e| e == ext) {
        return None;
    }
    Some(stem)
}

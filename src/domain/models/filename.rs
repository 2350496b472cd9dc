//! Basename and extension splitting for uploaded file names.

/// Strip any directory part, accepting both `/` and `\` separators.
fn file_part(filename: &str) -> &str {
    filename
        .rfind(['/', '\\'])
        .map_or(filename, |idx| &filename[idx + 1..])
}

/// File name without directory and without its last extension.
///
/// `photos/cat.tar.gz` yields `cat.tar`; a name without a dot is returned whole.
pub fn basename(filename: &str) -> &str {
    let name = file_part(filename);
    name.rfind('.').map_or(name, |idx| &name[..idx])
}

/// Text after the last dot of the file name, or empty when there is none.
pub fn extension(filename: &str) -> &str {
    let name = file_part(filename);
    name.rfind('.').map_or("", |idx| &name[idx + 1..])
}

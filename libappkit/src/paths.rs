//! File name helpers for `/`-separated paths and URIs

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

/// Last `/`-separated component of `path`.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Text after the last `.` of the file name, if any.
pub fn file_extension(path: &str) -> Option<&str> {
    file_name(path).rsplit_once('.').map(|(_, ext)| ext)
}

/// File name up to its first `.`, so "archive.tar.gz" gives "archive".
pub fn file_name_without_extension(path: &str) -> &str {
    let name = file_name(path);
    name.split('.').next().unwrap_or(name)
}

/// True for jpg, jpeg, png, bmp and tiff files, in any letter case.
pub fn is_image_path(path: &str) -> bool {
    file_extension(path)
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/var/mobile/photos/cat.jpg"), "cat.jpg");
        assert_eq!(file_name("cat.jpg"), "cat.jpg");
        assert_eq!(file_name("dir/"), "");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.final.pdf"), Some("pdf"));
        assert_eq!(file_extension("releases.d/README"), None);
        assert_eq!(file_extension("Makefile"), None);
    }

    #[test]
    fn test_file_name_without_extension() {
        assert_eq!(file_name_without_extension("/tmp/archive.tar.gz"), "archive");
        assert_eq!(file_name_without_extension("notes"), "notes");
    }

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path("file:///tmp/IMG_0001.JPG"));
        assert!(is_image_path("scan.tiff"));
        assert!(is_image_path("icon.Png"));
        assert!(!is_image_path("clip.mp4"));
        assert!(!is_image_path("png"));
        assert!(!is_image_path("photo.jpg.txt"));
    }
}

use crate::SharedString;

/// A file picked by the user, held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaFile {
    /// The file name without directories.
    file_name: String,
    /// The file content.
    bytes: Vec<u8>,
}

impl MediaFile {
    /// Creates a new instance.
    #[inline]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Returns the file name.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file content.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the content type guessed from the file extension.
    pub fn content_type(&self) -> SharedString {
        mime_guess::from_path(&self.file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .into()
    }

    /// Consumes `self` and returns the file name.
    #[inline]
    pub(crate) fn into_file_name(self) -> String {
        self.file_name
    }
}

#[cfg(test)]
mod tests {
    use super::MediaFile;

    #[test]
    fn it_guesses_content_types() {
        assert_eq!(MediaFile::new("cert.pdf", Vec::new()).content_type(), "application/pdf");
        assert_eq!(MediaFile::new("photo.jpeg", Vec::new()).content_type(), "image/jpeg");
        assert_eq!(
            MediaFile::new("blob", Vec::new()).content_type(),
            "application/octet-stream"
        );
    }
}

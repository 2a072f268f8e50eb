use crate::core::{EditableFile, RemoteFile};

/// A Word document. Can be downloaded and edited.
#[derive(Debug, Clone)]
pub struct DocxFile {
    name: String,
    content: Vec<u8>,
}

impl DocxFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl RemoteFile for DocxFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn download(&self) -> Vec<u8> {
        tracing::debug!("Downloading DOCX file {}", self.name);
        self.content.clone()
    }
}

impl EditableFile for DocxFile {
    fn update(&mut self, content: &[u8]) {
        tracing::debug!("Updating DOCX file {}", self.name);
        self.content = content.to_vec();
    }
}

/// A PDF document. Download only; it has no `update` to refuse.
#[derive(Debug, Clone)]
pub struct PdfFile {
    name: String,
    content: Vec<u8>,
}

impl PdfFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl RemoteFile for PdfFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn download(&self) -> Vec<u8> {
        tracing::debug!("Downloading PDF file {}", self.name);
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download_all(files: &[&dyn RemoteFile]) -> Vec<(String, usize)> {
        files
            .iter()
            .map(|f| (f.name().to_string(), f.download().len()))
            .collect()
    }

    #[test]
    fn test_any_remote_file_downloads() {
        let docx = DocxFile::new("report.docx", b"docx".to_vec());
        let pdf = PdfFile::new("report.pdf", b"%PDF-1.7".to_vec());

        let files: [&dyn RemoteFile; 2] = [&docx, &pdf];
        let sizes = download_all(&files);
        assert_eq!(
            sizes,
            vec![("report.docx".to_string(), 4), ("report.pdf".to_string(), 8)]
        );
    }

    #[test]
    fn test_docx_update_replaces_content() {
        let mut docx = DocxFile::new("notes.docx", "v1");
        docx.update(b"v2");
        assert_eq!(docx.download(), b"v2");
    }
}

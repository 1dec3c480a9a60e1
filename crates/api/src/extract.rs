//! Request extractors that reject with [`AppError`] instead of Axum's
//! plain-text defaults.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::Json;
use maraton_core::types::DbId;

use crate::error::{AppError, AppResult};

/// `Json<T>` whose rejections become `400` error envelopes.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path<T>` whose rejections become `404` error envelopes, so
/// `/api/events/abc` answers like an unknown route.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// A file part from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename (unsanitized).
    pub file_name: String,
    pub bytes: Bytes,
}

/// A fully buffered multipart form: text fields and file parts.
///
/// File parts whose filename is empty are dropped; browsers send those for
/// an untouched file input.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: Vec<(String, String)>,
    files: Vec<(String, UploadedFile)>,
}

impl UploadForm {
    /// First value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// A text field that must be present and non-blank.
    pub fn required_text(&self, name: &str) -> AppResult<String> {
        match self.text(name).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(AppError::BadRequest(format!(
                "Missing required field '{name}'"
            ))),
        }
    }

    /// A text field; missing or blank values fall back to `default`.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        match self.text(name).map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }

    /// A required integer field.
    pub fn required_int<T: std::str::FromStr>(&self, name: &str) -> AppResult<T> {
        let raw = self.required_text(name)?;
        raw.parse().map_err(|_| {
            AppError::BadRequest(format!("Field '{name}' must be an integer, got '{raw}'"))
        })
    }

    /// A required primary-key field.
    pub fn required_id(&self, name: &str) -> AppResult<DbId> {
        self.required_int(name)
    }

    /// Remove and return the first file sent under `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        let index = self.files.iter().position(|(field, _)| field == name)?;
        Some(self.files.remove(index).1)
    }

    /// Remove and return every file sent under any of `names`, in upload order.
    pub fn take_files(&mut self, names: &[&str]) -> Vec<UploadedFile> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|(field, _)| names.contains(&field.as_str()));
        self.files = kept;
        taken.into_iter().map(|(_, file)| file).collect()
    }

    /// Buffer every part of a multipart stream.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() {
                        form.files.push((name, UploadedFile { file_name, bytes }));
                    }
                }
                None => {
                    let text = field.text().await?;
                    form.fields.push((name, text));
                }
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Self::from_multipart(multipart).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn form() -> UploadForm {
        UploadForm {
            fields: vec![
                ("title".into(), "  Carrera  ".into()),
                ("blank".into(), "   ".into()),
                ("year".into(), "2025".into()),
                ("bad_year".into(), "twenty".into()),
            ],
            files: vec![
                ("files[]".into(), file("a.png")),
                ("cover".into(), file("c.jpg")),
                ("files".into(), file("b.gif")),
            ],
        }
    }

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.into(),
            bytes: Bytes::from_static(b"x"),
        }
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        let form = form();
        assert_eq!(form.required_text("title").unwrap(), "Carrera");
        assert_matches!(form.required_text("blank"), Err(AppError::BadRequest(_)));
        assert_matches!(form.required_text("missing"), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn text_or_falls_back_on_blank() {
        let form = form();
        assert_eq!(form.text_or("blank", "evento"), "evento");
        assert_eq!(form.text_or("missing", "image"), "image");
        assert_eq!(form.text_or("title", "x"), "Carrera");
    }

    #[test]
    fn required_int_parses() {
        let form = form();
        assert_eq!(form.required_int::<i32>("year").unwrap(), 2025);
        assert_matches!(form.required_int::<i32>("bad_year"), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn take_files_collects_matching_names_in_order() {
        let mut form = form();
        let taken = form.take_files(&["files[]", "files"]);
        let names: Vec<_> = taken.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.gif"]);

        assert!(form.take_file("files[]").is_none());
        assert_eq!(form.take_file("cover").unwrap().file_name, "c.jpg");
        assert!(form.take_file("cover").is_none());
    }
}
